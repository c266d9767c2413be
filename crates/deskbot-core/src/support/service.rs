//! Session orchestration for the support desk.
//!
//! `SupportService` ties the conversation repository, the in-memory session
//! cache, and the FAQ responder together: it resolves or creates a
//! conversation for each inbound message, runs the responder, and persists
//! the full conversation snapshot after every turn.

use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use deskbot_types::chat::{Conversation, ConversationHead, MessageRole};
use deskbot_types::error::SupportError;

use crate::llm::provider::LlmProvider;
use crate::support::repository::ConversationRepository;
use crate::support::responder::FaqResponder;

/// Outcome of one handled message.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub session_id: String,
    pub reply: String,
    pub escalated: bool,
    pub suggested_actions: Vec<String>,
}

/// A conversation summary plus its message count.
#[derive(Debug, Clone)]
pub struct ConversationSummary {
    pub summary: String,
    pub message_count: usize,
}

/// Orchestrates the conversation lifecycle.
///
/// Generic over `ConversationRepository` and `LlmProvider` so the core
/// never depends on the infrastructure crate. The session cache is owned
/// by the service instance; concurrent turns on the same session id are
/// last-write-wins on the full-record save.
pub struct SupportService<R: ConversationRepository, P: LlmProvider> {
    conversations: R,
    responder: FaqResponder<P>,
    cache: DashMap<String, Conversation>,
}

impl<R: ConversationRepository, P: LlmProvider> SupportService<R, P> {
    /// Create a new service with the given repository and responder.
    pub fn new(conversations: R, responder: FaqResponder<P>) -> Self {
        Self {
            conversations,
            responder,
            cache: DashMap::new(),
        }
    }

    /// Handle one inbound user message.
    ///
    /// Resolves or creates the conversation, appends the user message,
    /// generates a reply, appends it, applies one-way escalation, and
    /// persists the full conversation before returning.
    pub async fn handle_message(
        &self,
        session_id: Option<String>,
        message: &str,
    ) -> Result<ChatOutcome, SupportError> {
        if message.trim().is_empty() {
            return Err(SupportError::EmptyMessage);
        }

        let (session_id, mut conversation) = match session_id {
            Some(sid) => {
                let conversation = self.resolve_or_create(&sid).await?;
                (sid, conversation)
            }
            None => {
                let sid = Uuid::now_v7().to_string();
                let conversation = Conversation::new(sid.clone());
                (sid, conversation)
            }
        };

        conversation.append(MessageRole::User, message);

        // History excludes the message just appended; the responder takes
        // the latest message separately.
        let history_end = conversation.messages.len() - 1;
        let generated = self
            .responder
            .generate(message, &conversation.messages[..history_end])
            .await;

        conversation.append(MessageRole::Assistant, generated.reply.as_str());
        if generated.needs_escalation {
            conversation.escalate();
        }

        self.conversations.save(&conversation).await?;

        let outcome = ChatOutcome {
            session_id: session_id.clone(),
            reply: generated.reply,
            escalated: conversation.escalated,
            suggested_actions: generated.suggested_actions,
        };

        info!(
            session_id = %session_id,
            escalated = outcome.escalated,
            messages = conversation.messages.len(),
            "handled message"
        );
        self.cache.insert(session_id, conversation);

        Ok(outcome)
    }

    /// Get a conversation, checking the cache before the store.
    pub async fn get_conversation(&self, session_id: &str) -> Result<Conversation, SupportError> {
        if let Some(found) = self.cache.get(session_id) {
            return Ok(found.clone());
        }
        self.conversations
            .load(session_id)
            .await?
            .ok_or(SupportError::NotFound)
    }

    /// Delete a conversation from both the cache and the store.
    ///
    /// Returns whether a stored record existed. Evicting an absent cache
    /// entry is not an error.
    pub async fn delete_conversation(&self, session_id: &str) -> Result<bool, SupportError> {
        self.cache.remove(session_id);
        let existed = self.conversations.delete(session_id).await?;
        if existed {
            info!(session_id, "conversation deleted");
        }
        Ok(existed)
    }

    /// Summarize a conversation's full message list.
    pub async fn summarize(&self, session_id: &str) -> Result<ConversationSummary, SupportError> {
        let conversation = self.get_conversation(session_id).await?;
        let summary = self.responder.summarize(&conversation.messages).await;
        Ok(ConversationSummary {
            summary,
            message_count: conversation.messages.len(),
        })
    }

    /// List stored conversations, newest first.
    ///
    /// Sourced from the durable store only; a conversation that has never
    /// been saved does not appear.
    pub async fn list_conversations(&self) -> Result<Vec<ConversationHead>, SupportError> {
        Ok(self.conversations.list_all().await?)
    }

    /// Resolve a session id to its conversation, creating a fresh one when
    /// neither the cache nor the store has it.
    async fn resolve_or_create(&self, session_id: &str) -> Result<Conversation, SupportError> {
        if let Some(found) = self.cache.get(session_id) {
            return Ok(found.clone());
        }

        match self.conversations.load(session_id).await? {
            Some(stored) => Ok(stored),
            None => {
                debug!(session_id, "no stored conversation, creating");
                Ok(Conversation::new(session_id))
            }
        }
    }
}
