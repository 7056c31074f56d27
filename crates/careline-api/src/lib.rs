//! Careline application layer: the `careline` binary's CLI, the axum REST
//! API, and the terminal chat client.

pub mod cli;
pub mod http;
pub mod state;
