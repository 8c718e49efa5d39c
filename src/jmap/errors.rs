use crate::domain::errors::DomainError;
use thiserror::Error;

/// Failure of a single method call.
#[derive(Error, Debug)]
pub enum JmapError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl JmapError {
    /// Value of the `type` member of the JMAP error response.
    pub fn error_type(&self) -> &'static str {
        match self {
            JmapError::UnknownMethod(_) => "unknownMethod",
            JmapError::InvalidArguments(_) => "invalidArguments",
            JmapError::Domain(_) => "serverError",
        }
    }
}
