//! Business logic and trait definitions for Deskbot.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements. It depends only on `deskbot-types` --
//! never on `deskbot-infra` or any database/IO crate.

pub mod llm;
pub mod support;
