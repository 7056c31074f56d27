//! Interactive terminal chat client.
//!
//! Talks to a running `careline serve` over HTTP: fetches a greeting from
//! `/start`, then posts each line to `/chat` carrying the session id until
//! the user quits or the server ends the session. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod client;
pub mod commands;
pub mod input;
pub mod loop_runner;
