use crate::config::{Config, StorageBackend};
use crate::domain::entities::Session;
use crate::domain::errors::DomainResult;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::diagnostic_context::DiagnosticContext;
use crate::domain::ports::metric_factory::MetricFactory;
use crate::domain::ports::session_repository::SessionRepository;
use crate::domain::ports::vacation_repository::VacationRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::observability::{HistogramMetricFactory, TracingDiagnosticContext};
use crate::infrastructure::persistence::{
    Database, InMemorySessionRepository, InMemoryVacationRepository,
};
use crate::infrastructure::runtime::SystemClock;
use crate::jmap::methods::GetVacationResponseMethod;
use crate::jmap::MethodRegistry;
use std::sync::Arc;

/// Shared collaborators handed to every JMAP method.
#[derive(Clone)]
pub struct MethodDependencies {
    pub vacation_repository: Arc<dyn VacationRepository>,
    pub clock: Arc<dyn Clock>,
    pub metric_factory: Arc<dyn MetricFactory>,
    pub diagnostic_context: Arc<dyn DiagnosticContext>,
}

/// Register every JMAP method this server answers.
pub fn build_registry(dependencies: MethodDependencies) -> DomainResult<MethodRegistry> {
    let registry = MethodRegistry::new().with_method(Arc::new(GetVacationResponseMethod::new(
        dependencies.vacation_repository,
        dependencies.clock,
        dependencies.metric_factory,
        dependencies.diagnostic_context,
    )))?;

    tracing::info!(methods = ?registry.method_names(), "JMAP method registry built");
    Ok(registry)
}

pub async fn build_app_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let (vacation_repository, session_repository): (
        Arc<dyn VacationRepository>,
        Arc<dyn SessionRepository>,
    ) = match config.storage_backend {
        StorageBackend::Sql => {
            let db = Database::connect(&config.database_url).await?;
            tracing::info!("Database connection established");

            db.run_migrations().await?;
            tracing::info!("Database migrations applied");

            (
                Arc::new(db.clone()) as Arc<dyn VacationRepository>,
                Arc::new(db) as Arc<dyn SessionRepository>,
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on shutdown");
            (
                Arc::new(InMemoryVacationRepository::new()) as Arc<dyn VacationRepository>,
                Arc::new(InMemorySessionRepository::new()) as Arc<dyn SessionRepository>,
            )
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

    initialize_bootstrap_session(session_repository.as_ref(), clock.as_ref(), config).await?;

    let registry = build_registry(MethodDependencies {
        vacation_repository,
        clock: clock.clone(),
        metric_factory: Arc::new(HistogramMetricFactory::new()),
        diagnostic_context: Arc::new(TracingDiagnosticContext::new()),
    })?;

    Ok(AppState::new(Arc::new(registry), session_repository, clock))
}

/// Create the configured startup session unless its token is already known.
pub async fn initialize_bootstrap_session(
    session_repository: &dyn SessionRepository,
    clock: &dyn Clock,
    config: &Config,
) -> DomainResult<Option<Session>> {
    let (Some(username), Some(token)) = (&config.bootstrap_username, &config.bootstrap_token)
    else {
        return Ok(None);
    };

    if let Some(existing) = session_repository.get_session_by_token(token).await? {
        if !existing.is_expired_at(clock.now()) {
            tracing::info!("Bootstrap session for {} already exists", existing.username);
            return Ok(Some(existing));
        }
        session_repository.delete_session(token).await?;
    }

    let session = Session::new(
        username.clone(),
        token.clone(),
        config.session_duration_hours,
        clock.now(),
    );
    session_repository.create_session(&session).await?;
    tracing::info!("Bootstrap session created for {}", username);

    Ok(Some(session))
}
