//! Secret lookup.
//!
//! - `env`: environment variable provider (the only backend; `.env` is
//!   loaded into the environment at startup)

pub mod env;

pub use env::EnvSecretProvider;
