//! Application state shared by the HTTP handlers.
//!
//! The chat service is generic over its session store; `AppState` pins it to
//! the in-memory store.

use std::sync::Arc;

use careline_core::chat::service::{ChatService, ChatSettings};
use careline_core::session::InMemorySessionStore;
use careline_infra::llm::create_provider;
use careline_infra::secret::EnvSecretProvider;
use careline_types::config::AppConfig;

pub type ConcreteChatService = ChatService<InMemorySessionStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Wrap an already built chat service.
    pub fn new(chat_service: ConcreteChatService) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
        }
    }

    /// Resolve the API key, build the LLM provider, and wire the chat service.
    ///
    /// # Errors
    ///
    /// Fails when the API key variable named by `llm.api_key_env` is unset or
    /// the provider name is unknown.
    pub fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let api_key = EnvSecretProvider::new().require(&config.llm.api_key_env)?;
        let provider = create_provider(&config.llm, api_key)?;

        tracing::info!(
            provider = provider.name(),
            model = %config.llm.model,
            max_turns = config.session.max_turns,
            "Chat service ready"
        );

        let service = ChatService::new(
            InMemorySessionStore::new(),
            provider,
            ChatSettings::from_config(&config.llm, &config.session),
        );
        Ok(Self::new(service))
    }
}
