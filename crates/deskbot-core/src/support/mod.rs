//! Support-desk conversation lifecycle.
//!
//! Orchestration (`service`), FAQ-constrained response generation
//! (`responder`), and the persistence port (`repository`).

pub mod repository;
pub mod responder;
pub mod service;
