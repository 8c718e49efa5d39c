use crate::domain::errors::DomainResult;
use tracing::Span;

/// Context key naming the kind of operation being served.
pub const ACTION: &str = "action";

/// Backend half of an open diagnostic scope.
pub trait ScopeHandle: Send {
    /// Span that log output produced inside the scope should be attached to.
    fn span(&self) -> Span;

    fn close(self: Box<Self>) -> DomainResult<()>;
}

/// Attaches key/value tags to log output for the duration of one call.
pub trait DiagnosticContext: Send + Sync {
    fn open(&self, key: &'static str, value: &str) -> DomainResult<DiagnosticScope>;
}

/// An open diagnostic tag. Closed exactly once, by [`DiagnosticScope::close`]
/// or on drop. Only an explicit close reports failures.
pub struct DiagnosticScope {
    handle: Option<Box<dyn ScopeHandle>>,
}

impl DiagnosticScope {
    pub fn new(handle: Box<dyn ScopeHandle>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn span(&self) -> Span {
        self.handle
            .as_ref()
            .map(|handle| handle.span())
            .unwrap_or_else(Span::none)
    }

    pub fn close(mut self) -> DomainResult<()> {
        match self.handle.take() {
            Some(handle) => handle.close(),
            None => Ok(()),
        }
    }
}

impl Drop for DiagnosticScope {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.close() {
                tracing::warn!("Failed to close diagnostic scope: {}", e);
            }
        }
    }
}
