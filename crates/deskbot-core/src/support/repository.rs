//! ConversationRepository trait definition.
//!
//! Every mutation is a whole-record overwrite: `save` replaces the stored
//! snapshot for the session id; there are no field-level updates. This keeps
//! the persisted state a single atomic unit per session.

use deskbot_types::chat::{Conversation, ConversationHead};
use deskbot_types::error::RepositoryError;

/// Repository trait for conversation persistence.
///
/// Implementations live in deskbot-infra (e.g., `SqliteConversationRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ConversationRepository: Send + Sync {
    /// Persist the full conversation state, replacing any prior record.
    ///
    /// Idempotent; `created_at` is written on first save and preserved on
    /// subsequent saves.
    fn save(
        &self,
        conversation: &Conversation,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Load a conversation by session id.
    fn load(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Conversation>, RepositoryError>> + Send;

    /// Delete a conversation. Returns whether a record existed.
    fn delete(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// List all stored conversations, newest first by creation time.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ConversationHead>, RepositoryError>> + Send;
}
