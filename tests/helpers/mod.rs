#![allow(dead_code, unused_imports)]
pub mod doubles;
pub mod fixtures;
pub mod test_db;

pub use doubles::*;
pub use fixtures::*;
pub use test_db::*;
