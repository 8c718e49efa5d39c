use super::error::ApiError;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::session_repository::SessionRepository;
use crate::jmap::MethodRegistry;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MethodRegistry>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        registry: Arc<MethodRegistry>,
        session_repository: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            session_repository,
            clock,
        }
    }
}

/// Resolve the bearer token to a session and expose it to handlers as a
/// `MailboxSession` extension.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
        .ok_or(ApiError::Unauthorized)?;

    let session = state
        .session_repository
        .get_session_by_token(&token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    if session.is_expired_at(state.clock.now()) {
        // Delete expired session
        state.session_repository.delete_session(&token).await.ok();
        tracing::debug!(username = %session.username, "Rejected expired session");
        return Err(ApiError::Unauthorized);
    }

    request.extensions_mut().insert(session.to_mailbox_session());

    Ok(next.run(request).await)
}
