//! HTTP/REST API layer for Deskbot.
//!
//! Axum-based REST API with CORS support and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
