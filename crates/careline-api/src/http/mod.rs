//! HTTP API for Careline.
//!
//! `GET /start`, `POST /chat`, `GET /health`. Success bodies are the bare
//! [`ChatResponse`](careline_types::chat::ChatResponse); failures use the
//! error envelope in [`response`].

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
