use thiserror::Error;

/// Errors surfaced by support-desk operations.
///
/// Collaborator (LLM) failures never appear here: the response generator
/// absorbs them into fallback replies, so only validation, lookup, and
/// storage failures reach the caller.
#[derive(Debug, Error)]
pub enum SupportError {
    #[error("message is required")]
    EmptyMessage,

    #[error("conversation not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in deskbot-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

impl From<RepositoryError> for SupportError {
    fn from(e: RepositoryError) -> Self {
        SupportError::Storage(e.to_string())
    }
}
