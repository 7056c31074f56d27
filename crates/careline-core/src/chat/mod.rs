//! Chat turn handling: the triage system prompt, reply parsing, and the
//! service that ties the session store to the LLM provider.

pub mod prompt;
pub mod reply;
pub mod service;
