use async_trait::async_trait;
use jmap_vacation::domain::entities::{AccountId, Vacation};
use jmap_vacation::domain::errors::{DomainError, DomainResult};
use jmap_vacation::domain::ports::diagnostic_context::{
    DiagnosticContext, DiagnosticScope, ScopeHandle,
};
use jmap_vacation::domain::ports::metric_factory::{MetricFactory, TimeMetric};
use jmap_vacation::domain::ports::vacation_repository::VacationRepository;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::Span;

/// Shared, ordered record of instrumentation calls.
#[derive(Clone, Default)]
pub struct CallLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .count()
    }
}

pub struct RecordingMetricFactory {
    log: CallLog,
}

impl RecordingMetricFactory {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl MetricFactory for RecordingMetricFactory {
    fn timer(&self, name: &str) -> Box<dyn TimeMetric> {
        self.log.record(format!("timer_start:{}", name));
        Box::new(RecordingTimer {
            name: name.to_string(),
            log: self.log.clone(),
        })
    }
}

struct RecordingTimer {
    name: String,
    log: CallLog,
}

impl TimeMetric for RecordingTimer {
    fn name(&self) -> &str {
        &self.name
    }

    fn stop_and_publish(self: Box<Self>) -> Duration {
        self.log.record(format!("timer_stop:{}", self.name));
        Duration::from_millis(1)
    }
}

pub struct RecordingDiagnosticContext {
    log: CallLog,
    fail_on_close: bool,
}

impl RecordingDiagnosticContext {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_on_close: false,
        }
    }

    pub fn failing_on_close(log: CallLog) -> Self {
        Self {
            log,
            fail_on_close: true,
        }
    }
}

impl DiagnosticContext for RecordingDiagnosticContext {
    fn open(&self, key: &'static str, value: &str) -> DomainResult<DiagnosticScope> {
        let tag = format!("{}={}", key, value);
        self.log.record(format!("scope_open:{}", tag));
        Ok(DiagnosticScope::new(Box::new(RecordingScope {
            tag,
            log: self.log.clone(),
            fail_on_close: self.fail_on_close,
        })))
    }
}

struct RecordingScope {
    tag: String,
    log: CallLog,
    fail_on_close: bool,
}

impl ScopeHandle for RecordingScope {
    fn span(&self) -> Span {
        Span::none()
    }

    fn close(self: Box<Self>) -> DomainResult<()> {
        self.log.record(format!("scope_close:{}", self.tag));
        if self.fail_on_close {
            Err(DomainError::DiagnosticContext(
                "context backend unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

/// Repository whose lookups always fail.
pub struct FailingVacationRepository {
    message: String,
}

impl FailingVacationRepository {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl VacationRepository for FailingVacationRepository {
    async fn retrieve_vacation(&self, _account_id: &AccountId) -> DomainResult<Vacation> {
        Err(DomainError::Repository(self.message.clone()))
    }

    async fn modify_vacation(&self, _account_id: &AccountId, _vacation: &Vacation) -> DomainResult<()> {
        Err(DomainError::Repository(self.message.clone()))
    }
}

/// Repository whose lookups never complete.
pub struct HangingVacationRepository;

#[async_trait]
impl VacationRepository for HangingVacationRepository {
    async fn retrieve_vacation(&self, _account_id: &AccountId) -> DomainResult<Vacation> {
        futures::future::pending().await
    }

    async fn modify_vacation(&self, _account_id: &AccountId, _vacation: &Vacation) -> DomainResult<()> {
        futures::future::pending().await
    }
}
