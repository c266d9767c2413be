//! Application error type mapping to HTTP status codes.
//!
//! Error bodies are `{"error": "..."}`. Collaborator (LLM) failures never
//! reach this type; they are absorbed into fallback replies upstream.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use deskbot_types::error::SupportError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid request input.
    Validation(String),
    /// Unknown session id.
    NotFound(String),
    /// Persistence failure; the message includes the cause.
    Storage(String),
}

impl From<SupportError> for AppError {
    fn from(e: SupportError) -> Self {
        match e {
            SupportError::EmptyMessage => AppError::Validation("Message is required".to_string()),
            SupportError::NotFound => AppError::NotFound("Conversation not found".to_string()),
            SupportError::Storage(_) => AppError::Storage(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_maps_to_400() {
        let err: AppError = SupportError::EmptyMessage.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = SupportError::NotFound.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_maps_to_500_with_cause() {
        let err: AppError = SupportError::Storage("disk full".to_string()).into();
        match &err {
            AppError::Storage(msg) => assert!(msg.contains("disk full")),
            other => panic!("expected Storage, got {other:?}"),
        }
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
