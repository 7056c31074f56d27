//! Environment variable secret provider.
//!
//! Read-only: values come from the process environment, which `main` seeds
//! from `.env` via dotenvy before anything else runs.

use secrecy::SecretString;

use careline_types::error::ConfigError;

/// Environment variable secret provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look up `key` as an environment variable name.
    ///
    /// Unset, empty, and non-Unicode values are all treated as absent.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "Ignoring non-Unicode environment variable");
                None
            }
        }
    }

    /// Like [`get`](Self::get), but a missing value is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecret`] naming the variable.
    pub fn require(&self, key: &str) -> Result<SecretString, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingSecret(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_env_provider_get_existing() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("CARELINE_TEST_SECRET_1", "gsk-value-123") };

        let provider = EnvSecretProvider::new();
        let result = provider.get("CARELINE_TEST_SECRET_1").unwrap();
        assert_eq!(result.expose_secret(), "gsk-value-123");

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("CARELINE_TEST_SECRET_1") };
    }

    #[test]
    fn test_env_provider_get_missing() {
        let provider = EnvSecretProvider::new();
        assert!(provider.get("NONEXISTENT_VAR_XYZ_123").is_none());
    }

    #[test]
    fn test_env_provider_empty_is_missing() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("CARELINE_TEST_SECRET_EMPTY", "  ") };

        let provider = EnvSecretProvider::new();
        assert!(provider.get("CARELINE_TEST_SECRET_EMPTY").is_none());

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("CARELINE_TEST_SECRET_EMPTY") };
    }

    #[test]
    fn test_env_provider_require_missing_names_variable() {
        let provider = EnvSecretProvider::new();
        let err = provider.require("CARELINE_TEST_ABSENT_KEY").unwrap_err();
        assert_eq!(
            err.to_string(),
            "CARELINE_TEST_ABSENT_KEY not found in environment variables"
        );
    }
}
