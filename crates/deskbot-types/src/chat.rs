//! Conversation and message types for Deskbot.
//!
//! A conversation is the full state of one support session: its opaque
//! session id, the ordered message list, and the escalation flag. The
//! message list is append-only and never reordered or truncated at rest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole from the llm module (it's used in both chat and
// llm contexts).
pub use crate::llm::MessageRole;

/// A single message within a conversation.
///
/// Messages are ordered by insertion; `timestamp` is set at append time
/// and serialized as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current time.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One support session's full in-memory state.
///
/// `escalated` is monotonic: [`Conversation::escalate`] is the only way to
/// change it and there is no operation that resets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub escalated: bool,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create an empty conversation for a session id.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            escalated: false,
            created_at: Utc::now(),
        }
    }

    /// Reconstruct a conversation from stored state.
    pub fn restore(
        session_id: impl Into<String>,
        messages: Vec<ChatMessage>,
        escalated: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            messages,
            escalated,
            created_at,
        }
    }

    /// Append a message, stamped with the current time.
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage::new(role, content));
        self.messages
            .last()
            .unwrap_or_else(|| unreachable!("push above guarantees a last element"))
    }

    /// Mark the conversation as needing a human. One-way.
    pub fn escalate(&mut self) {
        self.escalated = true;
    }

    /// The listing view of this conversation.
    pub fn head(&self) -> ConversationHead {
        ConversationHead {
            session_id: self.session_id.clone(),
            created_at: self.created_at,
            escalated: self.escalated,
        }
    }
}

/// Summary row for conversation listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHead {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub escalated: bool,
}
