pub mod account;
pub mod session;
pub mod vacation;

pub use account::*;
pub use session::*;
pub use vacation::*;
