use super::doubles::{CallLog, RecordingDiagnosticContext, RecordingMetricFactory};
use chrono::{DateTime, TimeZone, Utc};
use jmap_vacation::bootstrap::{build_registry, MethodDependencies};
use jmap_vacation::domain::entities::{AccountId, MailboxSession, Vacation};
use jmap_vacation::domain::ports::vacation_repository::VacationRepository;
use jmap_vacation::infrastructure::persistence::InMemoryVacationRepository;
use jmap_vacation::infrastructure::runtime::FixedClock;
use jmap_vacation::jmap::methods::GetVacationResponseMethod;
use jmap_vacation::jmap::MethodRegistry;
use std::sync::Arc;

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Enabled for all of January 2024 with text "Away".
pub fn january_vacation() -> Vacation {
    Vacation {
        is_enabled: true,
        from_date: Some(utc(2024, 1, 1, 0, 0)),
        to_date: Some(utc(2024, 1, 31, 23, 59)),
        text_body: Some("Away".to_string()),
        ..Vacation::default()
    }
}

pub fn session_for(username: &str) -> MailboxSession {
    MailboxSession::for_user(username)
}

pub async fn repository_with(
    entries: &[(&str, Vacation)],
) -> Arc<InMemoryVacationRepository> {
    let repository = Arc::new(InMemoryVacationRepository::new());
    for (account, vacation) in entries {
        let account_id = AccountId::from_string(*account).unwrap();
        repository.modify_vacation(&account_id, vacation).await.unwrap();
    }
    repository
}

pub fn method_with(
    repository: Arc<dyn VacationRepository>,
    now: DateTime<Utc>,
    log: &CallLog,
) -> GetVacationResponseMethod {
    GetVacationResponseMethod::new(
        repository,
        Arc::new(FixedClock::new(now)),
        Arc::new(RecordingMetricFactory::new(log.clone())),
        Arc::new(RecordingDiagnosticContext::new(log.clone())),
    )
}

pub fn registry_with(
    repository: Arc<dyn VacationRepository>,
    now: DateTime<Utc>,
    log: &CallLog,
) -> MethodRegistry {
    build_registry(MethodDependencies {
        vacation_repository: repository,
        clock: Arc::new(FixedClock::new(now)),
        metric_factory: Arc::new(RecordingMetricFactory::new(log.clone())),
        diagnostic_context: Arc::new(RecordingDiagnosticContext::new(log.clone())),
    })
    .unwrap()
}
