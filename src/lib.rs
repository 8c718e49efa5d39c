pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod jmap;

pub use config::*;
pub use domain::entities::*;
pub use domain::errors::{DomainError, DomainResult};
