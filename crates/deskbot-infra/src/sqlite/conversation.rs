//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `deskbot-core` using sqlx with
//! split read/write pools. Each save is a whole-record upsert: the messages
//! column holds the JSON-serialized message list for the session, and
//! `created_at` is written once and preserved by later saves.

use chrono::{DateTime, Utc};
use sqlx::Row;

use deskbot_core::support::repository::ConversationRepository;
use deskbot_types::chat::{ChatMessage, Conversation, ConversationHead};
use deskbot_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Conversation.
struct ConversationRow {
    session_id: String,
    messages: String,
    created_at: String,
    escalated: i64,
}

impl ConversationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            session_id: row.try_get("session_id")?,
            messages: row.try_get("messages")?,
            created_at: row.try_get("created_at")?,
            escalated: row.try_get("escalated")?,
        })
    }

    fn into_conversation(self) -> Result<Conversation, RepositoryError> {
        let messages: Vec<ChatMessage> = serde_json::from_str(&self.messages)
            .map_err(|e| RepositoryError::Query(format!("invalid message list: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Conversation::restore(
            self.session_id,
            messages,
            self.escalated != 0,
            created_at,
        ))
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl ConversationRepository for SqliteConversationRepository {
    async fn save(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        let messages = serde_json::to_string(&conversation.messages)
            .map_err(|e| RepositoryError::Query(format!("serialize message list: {e}")))?;

        // created_at is deliberately absent from the DO UPDATE clause so the
        // stored creation time survives re-saves.
        sqlx::query(
            r#"INSERT INTO conversations (session_id, messages, created_at, escalated)
               VALUES (?, ?, ?, ?)
               ON CONFLICT(session_id) DO UPDATE SET
                   messages = excluded.messages,
                   escalated = excluded.escalated"#,
        )
        .bind(&conversation.session_id)
        .bind(messages)
        .bind(format_datetime(&conversation.created_at))
        .bind(i64::from(conversation.escalated))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, session_id: &str) -> Result<Option<Conversation>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM conversations WHERE session_id = ?")
            .bind(session_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let conversation_row = ConversationRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(conversation_row.into_conversation()?))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM conversations WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<ConversationHead>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT session_id, created_at, escalated FROM conversations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut heads = Vec::with_capacity(rows.len());
        for row in &rows {
            let session_id: String = row
                .try_get("session_id")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let created_at: String = row
                .try_get("created_at")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let escalated: i64 = row
                .try_get("escalated")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

            heads.push(ConversationHead {
                session_id,
                created_at: parse_datetime(&created_at)?,
                escalated: escalated != 0,
            });
        }

        Ok(heads)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use deskbot_types::chat::MessageRole;

    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_conversation(session_id: &str) -> Conversation {
        let mut conversation = Conversation::new(session_id);
        conversation.append(MessageRole::User, "What are your business hours?");
        conversation.append(MessageRole::Assistant, "We are open 9am-5pm Monday to Friday.");
        conversation
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let repo = SqliteConversationRepository::new(test_pool().await);

        let mut conversation = make_conversation("sess-roundtrip");
        conversation.escalate();
        repo.save(&conversation).await.unwrap();

        let loaded = repo.load("sess-roundtrip").await.unwrap().unwrap();
        assert_eq!(loaded.session_id, "sess-roundtrip");
        assert_eq!(loaded.messages.len(), 2);
        assert_eq!(loaded.messages[0].role, MessageRole::User);
        assert_eq!(loaded.messages[0].content, "What are your business hours?");
        assert_eq!(loaded.messages[1].role, MessageRole::Assistant);
        assert!(loaded.escalated);
    }

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let repo = SqliteConversationRepository::new(test_pool().await);
        let loaded = repo.load("missing").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_resave_replaces_record_and_keeps_created_at() {
        let repo = SqliteConversationRepository::new(test_pool().await);

        let mut conversation = make_conversation("sess-resave");
        repo.save(&conversation).await.unwrap();
        let original_created_at = conversation.created_at;

        conversation.append(MessageRole::User, "One more question");
        conversation.append(MessageRole::Assistant, "Of course.");
        // A stale created_at on the in-memory side must not leak into the
        // stored record.
        conversation.created_at = original_created_at + Duration::hours(1);
        repo.save(&conversation).await.unwrap();

        let loaded = repo.load("sess-resave").await.unwrap().unwrap();
        assert_eq!(loaded.messages.len(), 4);
        assert_eq!(
            loaded.created_at.to_rfc3339(),
            original_created_at.to_rfc3339()
        );
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let repo = SqliteConversationRepository::new(test_pool().await);

        repo.save(&make_conversation("sess-delete")).await.unwrap();

        assert!(repo.delete("sess-delete").await.unwrap());
        assert!(!repo.delete("sess-delete").await.unwrap());
        assert!(!repo.delete("never-existed").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = SqliteConversationRepository::new(test_pool().await);

        let now = Utc::now();
        let older = Conversation::restore(
            "older",
            vec![ChatMessage::new(MessageRole::User, "hi")],
            false,
            now - Duration::minutes(30),
        );
        let newer = Conversation::restore(
            "newer",
            vec![ChatMessage::new(MessageRole::User, "hi")],
            true,
            now,
        );
        repo.save(&older).await.unwrap();
        repo.save(&newer).await.unwrap();

        let heads = repo.list_all().await.unwrap();
        assert_eq!(heads.len(), 2);
        assert_eq!(heads[0].session_id, "newer");
        assert!(heads[0].escalated);
        assert_eq!(heads[1].session_id, "older");
        assert!(!heads[1].escalated);
    }

    #[tokio::test]
    async fn test_empty_message_list_roundtrips() {
        let repo = SqliteConversationRepository::new(test_pool().await);

        let conversation = Conversation::new("sess-empty");
        repo.save(&conversation).await.unwrap();

        let loaded = repo.load("sess-empty").await.unwrap().unwrap();
        assert!(loaded.messages.is_empty());
        assert!(!loaded.escalated);
    }
}
