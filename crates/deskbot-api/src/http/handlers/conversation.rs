//! Conversation retrieval, deletion, summary, and listing handlers.
//!
//! Endpoints:
//! - GET    /conversation/{id}         - Full message history
//! - DELETE /conversation/{id}         - Remove from cache and store
//! - GET    /conversation/{id}/summary - LLM-generated summary
//! - GET    /conversations             - List stored conversations

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use deskbot_types::chat::{ChatMessage, ConversationHead};

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body for a single conversation.
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub escalated: bool,
}

/// GET /conversation/{id}
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ConversationResponse>, AppError> {
    let conversation = state.support.get_conversation(&session_id).await?;

    Ok(Json(ConversationResponse {
        session_id: conversation.session_id,
        messages: conversation.messages,
        escalated: conversation.escalated,
    }))
}

/// Response body for a deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// DELETE /conversation/{id}
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), AppError> {
    let existed = state.support.delete_conversation(&session_id).await?;

    let (status, response) = if existed {
        (
            StatusCode::OK,
            DeleteResponse {
                success: true,
                message: "Conversation deleted successfully".to_string(),
            },
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            DeleteResponse {
                success: false,
                message: "Conversation not found".to_string(),
            },
        )
    };

    Ok((status, Json(response)))
}

/// Response body for a conversation summary.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub session_id: String,
    pub summary: String,
    pub message_count: usize,
}

/// GET /conversation/{id}/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.support.summarize(&session_id).await?;

    Ok(Json(SummaryResponse {
        session_id,
        summary: summary.summary,
        message_count: summary.message_count,
    }))
}

/// Response body for the conversation listing.
#[derive(Debug, Serialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationHead>,
    pub count: usize,
}

/// GET /conversations
pub async fn list_conversations(
    State(state): State<AppState>,
) -> Result<Json<ConversationListResponse>, AppError> {
    let conversations = state.support.list_conversations().await?;
    let count = conversations.len();

    Ok(Json(ConversationListResponse {
        conversations,
        count,
    }))
}
