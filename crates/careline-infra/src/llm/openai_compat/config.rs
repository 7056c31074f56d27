//! Configuration types and per-provider defaults for OpenAI-compatible providers.
//!
//! Each vendor that speaks the OpenAI chat completions protocol gets a factory
//! function returning an [`OpenAiCompatConfig`] with the right base URL and
//! capabilities.

use secrecy::SecretString;

use careline_types::llm::ProviderCapabilities;

/// Groq's OpenAI-compatible endpoint.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// OpenAI's own endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Provider name used in logs and spans (e.g., "groq").
    pub provider_name: String,
    /// Base URL for the API.
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Fallback model when a request leaves `model` empty.
    pub model: String,
    pub capabilities: ProviderCapabilities,
}

/// Groq default configuration.
///
/// Base URL: `https://api.groq.com/openai/v1`
/// Capabilities: JSON mode, 32K output tokens.
pub fn groq_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "groq".into(),
        base_url: GROQ_BASE_URL.into(),
        api_key,
        model: model.into(),
        capabilities: ProviderCapabilities {
            json_mode: true,
            max_output_tokens: 32_768,
        },
    }
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
/// Capabilities: JSON mode, 16K output tokens.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
        capabilities: ProviderCapabilities {
            json_mode: true,
            max_output_tokens: 16_384,
        },
    }
}

/// Configuration for any other OpenAI-compatible endpoint.
///
/// Capabilities are unknown, so JSON mode is assumed and the output limit is
/// conservative.
pub fn custom_defaults(
    provider_name: &str,
    base_url: &str,
    api_key: SecretString,
    model: &str,
) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: provider_name.into(),
        base_url: base_url.trim_end_matches('/').into(),
        api_key,
        model: model.into(),
        capabilities: ProviderCapabilities {
            json_mode: true,
            max_output_tokens: 4_096,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn key() -> SecretString {
        SecretString::from("gsk-test".to_string())
    }

    #[test]
    fn test_groq_defaults() {
        let config = groq_defaults(key(), "llama-3.3-70b-versatile");
        assert_eq!(config.provider_name, "groq");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.api_key.expose_secret(), "gsk-test");
        assert!(config.capabilities.json_mode);
    }

    #[test]
    fn test_openai_defaults() {
        let config = openai_defaults(key(), "gpt-4o-mini");
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.capabilities.max_output_tokens, 16_384);
    }

    #[test]
    fn test_custom_defaults_trims_trailing_slash() {
        let config = custom_defaults("local", "http://localhost:11434/v1/", key(), "llama3");
        assert_eq!(config.provider_name, "local");
        assert_eq!(config.base_url, "http://localhost:11434/v1");
    }
}
