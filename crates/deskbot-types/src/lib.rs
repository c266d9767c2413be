//! Shared domain types for Deskbot.
//!
//! This crate contains the core domain types used across the Deskbot
//! support backend: conversations, messages, FAQ entries, LLM request and
//! response shapes, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod faq;
pub mod llm;
