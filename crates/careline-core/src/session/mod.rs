//! Session bookkeeping.
//!
//! `SessionStore` is the port the chat service talks to;
//! `InMemorySessionStore` is the process-local implementation.

pub mod memory;
pub mod store;

pub use memory::InMemorySessionStore;
pub use store::SessionStore;
