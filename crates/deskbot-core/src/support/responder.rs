//! FAQ-constrained response generation.
//!
//! `FaqResponder` wraps the LLM provider behind the contract the
//! orchestrator consumes: it always returns a reply. Provider failures are
//! absorbed into a fixed fallback with escalation forced on, so the call
//! site never handles an LLM error.

use tracing::warn;

use deskbot_types::chat::ChatMessage;
use deskbot_types::config::AppConfig;
use deskbot_types::faq::FaqBook;
use deskbot_types::llm::{CompletionRequest, Message, MessageRole};

use crate::llm::provider::LlmProvider;

/// Number of trailing history messages included in the completion request.
const HISTORY_WINDOW: usize = 4;

/// Upper bound on suggested next actions returned to the caller.
const MAX_SUGGESTED_ACTIONS: usize = 3;

/// Reply keywords that signal the conversation needs a human.
const ESCALATION_KEYWORDS: [&str; 5] = [
    "escalate",
    "human agent",
    "speak to someone",
    "transfer",
    "manager",
];

/// Reply used when the provider is unavailable or errors.
const FALLBACK_REPLY: &str =
    "I'm experiencing technical difficulties. Let me connect you with a human agent.";

/// Summary returned for a conversation with no messages. The provider is
/// not called in that case.
pub const EMPTY_SUMMARY: &str = "No conversation to summarize.";

/// Summary returned when the provider fails.
const SUMMARY_FALLBACK: &str = "Error generating summary.";

const SUMMARY_TEMPERATURE: f64 = 0.5;
const SUMMARY_MAX_TOKENS: u32 = 200;

const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes customer support conversations. Focus on the main issue, key points discussed, and resolution status.";

/// A generated reply plus the signals derived from it.
#[derive(Debug, Clone)]
pub struct GeneratedReply {
    pub reply: String,
    pub needs_escalation: bool,
    pub suggested_actions: Vec<String>,
}

/// Generates FAQ-constrained replies and conversation summaries.
///
/// Owns the provider, the FAQ book, and the model settings. Escalation and
/// suggested actions are derived here; callers treat them as opaque signals.
pub struct FaqResponder<P: LlmProvider> {
    provider: P,
    faqs: FaqBook,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl<P: LlmProvider> FaqResponder<P> {
    /// Create a responder from a provider, FAQ book, and model settings.
    pub fn new(provider: P, faqs: FaqBook, config: &AppConfig) -> Self {
        Self {
            provider,
            faqs,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Generate a reply to `user_message`.
    ///
    /// `history` is the conversation before the current message; the most
    /// recent four entries are sent along for context. This call never
    /// fails: provider errors degrade to a fixed fallback reply with
    /// escalation forced on.
    #[tracing::instrument(
        name = "generate_reply",
        skip(self, user_message, history),
        fields(model = %self.model, history_len = history.len())
    )]
    pub async fn generate(&self, user_message: &str, history: &[ChatMessage]) -> GeneratedReply {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        let mut messages: Vec<Message> = history[start..]
            .iter()
            .map(|m| Message {
                role: m.role.clone(),
                content: m.content.clone(),
            })
            .collect();
        messages.push(Message {
            role: MessageRole::User,
            content: user_message.to_string(),
        });

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            system: Some(self.system_prompt()),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        };

        match self.provider.complete(&request).await {
            Ok(response) => {
                let reply = response.content.trim().to_string();
                let needs_escalation = Self::needs_escalation(&reply);
                let suggested_actions = Self::suggest_next_actions(user_message);
                GeneratedReply {
                    reply,
                    needs_escalation,
                    suggested_actions,
                }
            }
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "completion failed, returning fallback reply"
                );
                GeneratedReply {
                    reply: FALLBACK_REPLY.to_string(),
                    needs_escalation: true,
                    suggested_actions: vec![
                        "Contact human support".to_string(),
                        "Check system status".to_string(),
                    ],
                }
            }
        }
    }

    /// Summarize a full conversation.
    ///
    /// Empty conversations short-circuit to [`EMPTY_SUMMARY`] without a
    /// provider call; provider errors degrade to a fixed fallback string.
    #[tracing::instrument(
        name = "summarize_conversation",
        skip(self, messages),
        fields(model = %self.model, message_count = messages.len())
    )]
    pub async fn summarize(&self, messages: &[ChatMessage]) -> String {
        if messages.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        let transcript: String = messages
            .iter()
            .map(|m| {
                let speaker = match m.role {
                    MessageRole::User => "Customer",
                    _ => "Support Agent",
                };
                format!("{speaker}: {}", m.content)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: format!(
                    "Please provide a brief summary of the following customer support conversation:\n\n{transcript}"
                ),
            }],
            system: Some(SUMMARY_SYSTEM_PROMPT.to_string()),
            max_tokens: SUMMARY_MAX_TOKENS,
            temperature: Some(SUMMARY_TEMPERATURE),
        };

        match self.provider.complete(&request).await {
            Ok(response) => response.content.trim().to_string(),
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "summary generation failed"
                );
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    /// Build the system prompt that pins replies to the FAQ book.
    fn system_prompt(&self) -> String {
        let faq_context = self
            .faqs
            .faqs
            .iter()
            .map(|faq| format!("Q: {}\nA: {}", faq.question, faq.answer))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are a helpful customer support assistant.

IMPORTANT: You must ONLY use information from the following FAQs to answer questions. Do NOT make up answers or use information not provided here.

FAQs:
{faq_context}

INSTRUCTIONS:
1. If the customer's question matches any FAQ above, provide EXACTLY the answer from the FAQ.
2. If the customer's question is NOT covered in the FAQs above, respond with: "I don't have specific information about that in my knowledge base. Let me connect you with a human agent who can better assist you."
3. Keep responses friendly and professional.
4. Do NOT invent or assume information not in the FAQs."#
        )
    }

    /// Scan a reply for keywords that indicate a handoff to a human.
    fn needs_escalation(reply: &str) -> bool {
        let reply_lower = reply.to_lowercase();
        ESCALATION_KEYWORDS
            .iter()
            .any(|keyword| reply_lower.contains(keyword))
    }

    /// Suggest up to three next actions based on the message topic.
    fn suggest_next_actions(user_message: &str) -> Vec<String> {
        let user_lower = user_message.to_lowercase();

        let actions: &[&str] = if user_lower.contains("password") || user_lower.contains("reset") {
            &["Reset password", "Contact support", "Check email"]
        } else if user_lower.contains("payment") || user_lower.contains("billing") {
            &["View payment methods", "Update billing info", "Contact billing support"]
        } else if user_lower.contains("shipping") || user_lower.contains("delivery") {
            &["Track order", "Update shipping address", "Contact shipping support"]
        } else if user_lower.contains("refund") {
            &["View refund policy", "Request refund", "Contact support"]
        } else if user_lower.contains("hours") || user_lower.contains("time") {
            &["View business hours", "Schedule callback", "Send email"]
        } else {
            &["View FAQs", "Contact support", "Return to main menu"]
        };

        actions
            .iter()
            .take(MAX_SUGGESTED_ACTIONS)
            .map(|s| (*s).to_string())
            .collect()
    }
}
