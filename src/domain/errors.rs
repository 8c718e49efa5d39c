use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// A caller broke the contract of an operation. Never retried.
    #[error("Precondition failed: {0}")]
    Precondition(String),
    #[error("Repository error: {0}")]
    Repository(String),
    #[error("Diagnostic context error: {0}")]
    DiagnosticContext(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
