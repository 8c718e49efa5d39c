use crate::domain::entities::{AccountId, MailboxSession};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::clock::Clock;
use crate::domain::ports::diagnostic_context::{DiagnosticContext, ACTION};
use crate::domain::ports::metric_factory::{MetricFactory, TimerGuard};
use crate::domain::ports::vacation_repository::VacationRepository;
use crate::jmap::method::{Method, MethodName, ResponseName, ResponseStream, JMAP_PREFIX};
use crate::jmap::model::{
    ClientId, GetVacationRequest, GetVacationResponse, JmapResponse, VacationResponse,
};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::Instrument;

pub const METHOD_NAME: MethodName = MethodName::new("getVacationResponse");
pub const RESPONSE_NAME: ResponseName = ResponseName::new("vacationResponse");

const VACATION_ACTION: &str = "VACATION";

/// Reads the vacation configuration of the session's account and reports
/// whether it is active right now.
pub struct GetVacationResponseMethod {
    vacation_repository: Arc<dyn VacationRepository>,
    clock: Arc<dyn Clock>,
    metric_factory: Arc<dyn MetricFactory>,
    diagnostic_context: Arc<dyn DiagnosticContext>,
}

impl GetVacationResponseMethod {
    pub fn new(
        vacation_repository: Arc<dyn VacationRepository>,
        clock: Arc<dyn Clock>,
        metric_factory: Arc<dyn MetricFactory>,
        diagnostic_context: Arc<dyn DiagnosticContext>,
    ) -> Self {
        Self {
            vacation_repository,
            clock,
            metric_factory,
            diagnostic_context,
        }
    }

    pub fn timer_name() -> String {
        format!("{}{}", JMAP_PREFIX, METHOD_NAME)
    }

    async fn load_response(&self, account_id: &AccountId) -> DomainResult<GetVacationResponse> {
        let vacation = self.vacation_repository.retrieve_vacation(account_id).await?;
        let activated = vacation.is_active_at(self.clock.now());

        tracing::debug!(account_id = %account_id, activated, "Vacation retrieved");

        Ok(GetVacationResponse::new(
            account_id,
            VacationResponse::from_vacation(&vacation, activated),
        ))
    }
}

#[async_trait]
impl Method for GetVacationResponseMethod {
    type Request = GetVacationRequest;

    fn request_handled(&self) -> MethodName {
        METHOD_NAME
    }

    async fn process(
        &self,
        _request: GetVacationRequest,
        client_id: ClientId,
        session: &MailboxSession,
    ) -> DomainResult<ResponseStream> {
        let account_id = AccountId::from_string(session.user().username()).map_err(|_| {
            DomainError::Precondition("Session is not bound to a user".to_string())
        })?;

        // Released in reverse order on every path, timer first.
        let scope = self.diagnostic_context.open(ACTION, VACATION_ACTION)?;
        let timer = TimerGuard::start(self.metric_factory.as_ref(), &Self::timer_name());

        let loaded = self.load_response(&account_id).instrument(scope.span()).await;

        timer.stop_and_publish();
        let closed = scope.close();
        let response = loaded?;
        closed?;

        let envelope = JmapResponse::new(client_id, RESPONSE_NAME, &response)?;
        Ok(stream::iter([envelope]).boxed())
    }
}
