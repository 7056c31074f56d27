//! Infrastructure layer for Careline.
//!
//! Contains the concrete adapters behind the ports defined in `careline-core`:
//! the OpenAI-compatible LLM provider (Groq by default), the TOML config
//! loader, and environment-variable secret lookup.

pub mod config;
pub mod llm;
pub mod secret;
