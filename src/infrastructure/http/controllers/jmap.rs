use crate::domain::entities::MailboxSession;
use crate::infrastructure::http::middleware::AppState;
use crate::jmap::{JmapResponse, MethodCall};
use axum::{extract::State, Extension, Json};

/// POST /jmap - Run a batch of `[name, arguments, clientId]` method calls
pub async fn handle_jmap(
    State(state): State<AppState>,
    Extension(session): Extension<MailboxSession>,
    Json(calls): Json<Vec<MethodCall>>,
) -> Json<Vec<JmapResponse>> {
    tracing::debug!(
        username = session.user().username(),
        calls = calls.len(),
        "JMAP request received"
    );

    Json(state.registry.process_calls(calls, &session).await)
}
