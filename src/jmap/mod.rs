pub mod errors;
pub mod method;
pub mod methods;
pub mod model;
pub mod registry;

pub use errors::*;
pub use method::*;
pub use model::*;
pub use registry::*;
