use crate::domain::errors::DomainResult;
use crate::domain::ports::diagnostic_context::{DiagnosticContext, DiagnosticScope, ScopeHandle};
use tracing::Span;

/// Diagnostic context backed by a `tracing` span: everything logged inside the
/// scope carries the tag.
#[derive(Clone, Default)]
pub struct TracingDiagnosticContext;

impl TracingDiagnosticContext {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticContext for TracingDiagnosticContext {
    fn open(&self, key: &'static str, value: &str) -> DomainResult<DiagnosticScope> {
        let span = tracing::info_span!("mdc", context.key = key, context.value = %value);
        Ok(DiagnosticScope::new(Box::new(SpanScope { span })))
    }
}

struct SpanScope {
    span: Span,
}

impl ScopeHandle for SpanScope {
    fn span(&self) -> Span {
        self.span.clone()
    }

    fn close(self: Box<Self>) -> DomainResult<()> {
        tracing::trace!(parent: &self.span, "Diagnostic scope closed");
        Ok(())
    }
}
