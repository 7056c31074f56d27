//! Business logic and port definitions for Careline.
//!
//! This crate defines the session store and LLM provider "ports" together
//! with the chat service that composes them. It depends only on
//! `careline-types` -- never on `careline-infra` or any network crate.

pub mod chat;
pub mod llm;
pub mod session;
