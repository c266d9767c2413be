//! POST /chat — handle one user message within a session.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Existing session id to continue; if absent, a new session is created.
    #[serde(default)]
    pub session_id: Option<String>,
    /// The user message. Required and non-empty.
    ///
    /// Defaults to empty when absent so a missing field surfaces as a 400
    /// validation error rather than a deserialization rejection.
    #[serde(default)]
    pub message: String,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub response: String,
    pub escalated: bool,
    pub suggested_actions: Vec<String>,
}

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let outcome = state
        .support
        .handle_message(body.session_id, &body.message)
        .await?;

    Ok(Json(ChatResponse {
        session_id: outcome.session_id,
        response: outcome.reply,
        escalated: outcome.escalated,
        suggested_actions: outcome.suggested_actions,
    }))
}
