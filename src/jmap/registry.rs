use crate::domain::entities::MailboxSession;
use crate::domain::errors::{DomainError, DomainResult};
use crate::jmap::errors::JmapError;
use crate::jmap::method::{DynMethod, ResponseStream};
use crate::jmap::model::{ClientId, JmapResponse, MethodCall};
use futures::StreamExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Routes method calls by name to their handler.
///
/// Filled once at startup and shared read-only afterwards.
#[derive(Clone, Default)]
pub struct MethodRegistry {
    methods: HashMap<&'static str, Arc<dyn DynMethod>>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method. A second method under the same name is a wiring bug.
    pub fn register(&mut self, method: Arc<dyn DynMethod>) -> DomainResult<()> {
        let name = method.method_name().as_str();
        if self.methods.contains_key(name) {
            return Err(DomainError::Precondition(format!(
                "Method {} is already registered",
                name
            )));
        }

        tracing::debug!(
            method = name,
            request_type = method.request_type_name(),
            "JMAP method registered"
        );
        self.methods.insert(name, method);
        Ok(())
    }

    pub fn with_method(mut self, method: Arc<dyn DynMethod>) -> DomainResult<Self> {
        self.register(method)?;
        Ok(self)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn DynMethod>> {
        self.methods.get(name).cloned()
    }

    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.methods.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve `name`, build its typed request and run it.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Value,
        client_id: ClientId,
        session: &MailboxSession,
    ) -> Result<ResponseStream, JmapError> {
        let method = self
            .lookup(name)
            .ok_or_else(|| JmapError::UnknownMethod(name.to_string()))?;
        let request = method.parse_arguments(arguments)?;
        method.process_erased(request, client_id, session).await
    }

    /// Run one call and collect its responses. A failed call turns into a
    /// single JMAP error response; it never affects other calls.
    pub async fn process_call(&self, call: MethodCall, session: &MailboxSession) -> Vec<JmapResponse> {
        let MethodCall(name, arguments, client_id) = call;
        let metric_label = match self.methods.get_key_value(name.as_str()) {
            Some((registered, _)) => *registered,
            None => "unknown",
        };

        match self
            .dispatch(&name, arguments, client_id.clone(), session)
            .await
        {
            Ok(responses) => {
                metrics::counter!(
                    "jmap_method_calls_total",
                    "method" => metric_label,
                    "outcome" => "success"
                )
                .increment(1);
                responses.collect().await
            }
            Err(e) => {
                metrics::counter!(
                    "jmap_method_calls_total",
                    "method" => metric_label,
                    "outcome" => e.error_type()
                )
                .increment(1);
                match &e {
                    JmapError::Domain(_) => {
                        tracing::error!(method = %name, client_id = %client_id, "JMAP method failed: {}", e)
                    }
                    _ => {
                        tracing::warn!(method = %name, client_id = %client_id, "JMAP call rejected: {}", e)
                    }
                }
                vec![JmapResponse::error(client_id, &e)]
            }
        }
    }

    /// Run calls in order, concatenating their responses.
    pub async fn process_calls(
        &self,
        calls: Vec<MethodCall>,
        session: &MailboxSession,
    ) -> Vec<JmapResponse> {
        let mut responses = Vec::with_capacity(calls.len());
        for call in calls {
            responses.extend(self.process_call(call, session).await);
        }
        responses
    }
}
