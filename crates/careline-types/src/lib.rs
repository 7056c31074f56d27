//! Shared domain types for Careline.
//!
//! This crate contains the types passed between the Careline layers:
//! sessions, chat request/response records, the parsed triage reply,
//! LLM request/response shapes, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod session;
