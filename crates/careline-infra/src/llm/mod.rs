//! LLM provider implementations.
//!
//! Contains the concrete implementation of the [`LlmProvider`] trait defined
//! in `careline-core`, plus a provider factory ([`create_provider`]) that
//! builds the right provider from the `[llm]` config section.
//!
//! [`LlmProvider`]: careline_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use careline_core::llm::box_provider::BoxLlmProvider;
use careline_types::config::LlmConfig;
use careline_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::custom_defaults;

/// Create a [`BoxLlmProvider`] from an [`LlmConfig`].
///
/// An explicit `base_url` always wins and is used with the generic
/// constructor. Otherwise the provider name picks a known endpoint.
///
/// # Errors
///
/// Returns [`LlmError::InvalidRequest`] for an unknown provider name with no
/// `base_url`.
pub fn create_provider(
    config: &LlmConfig,
    api_key: SecretString,
) -> Result<BoxLlmProvider, LlmError> {
    let provider = match config.base_url.as_deref() {
        Some(base_url) => OpenAiCompatibleProvider::new(custom_defaults(
            &config.provider,
            base_url,
            api_key,
            &config.model,
        )),
        None => match config.provider.as_str() {
            "groq" => OpenAiCompatibleProvider::groq(api_key, &config.model),
            "openai" => OpenAiCompatibleProvider::openai(api_key, &config.model),
            other => {
                return Err(LlmError::InvalidRequest(format!(
                    "unknown LLM provider '{other}' (set llm.base_url for custom endpoints)"
                )));
            }
        },
    };

    tracing::debug!(
        provider = %config.provider,
        model = %config.model,
        "LLM provider created"
    );

    Ok(BoxLlmProvider::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("gsk-test".to_string())
    }

    #[test]
    fn test_create_provider_groq_default() {
        let provider = create_provider(&LlmConfig::default(), key()).unwrap();
        assert_eq!(provider.name(), "groq");
        assert!(provider.capabilities().json_mode);
    }

    #[test]
    fn test_create_provider_openai() {
        let config = LlmConfig {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            ..LlmConfig::default()
        };
        let provider = create_provider(&config, key()).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_create_provider_custom_base_url() {
        let config = LlmConfig {
            provider: "ollama".to_string(),
            base_url: Some("http://localhost:11434/v1".to_string()),
            model: "llama3".to_string(),
            ..LlmConfig::default()
        };
        let provider = create_provider(&config, key()).unwrap();
        assert_eq!(provider.name(), "ollama");
    }

    #[test]
    fn test_create_provider_unknown_without_base_url() {
        let config = LlmConfig {
            provider: "mystery".to_string(),
            ..LlmConfig::default()
        };
        let err = create_provider(&config, key()).err().unwrap();
        assert!(matches!(err, LlmError::InvalidRequest(msg) if msg.contains("mystery")));
    }
}
