//! LLM integration for SilverAgent.
//!
//! The remote model is reached through the `LlmProvider` trait so the
//! gateway never sees transport details. The only backend today is Gemini,
//! spoken to directly over its REST API.

pub mod gemini;
#[cfg(test)]
pub(crate) mod mock;
pub mod provider;

pub use gemini::GeminiProvider;
pub use provider::*;

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::config::{API_KEY_ENV, API_KEY_ENV_FALLBACK};
use crate::error::{ConfigError, LlmError};

/// Fast model for interactive UI.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Public Gemini REST root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    Gemini,
}

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub backend: LlmBackend,
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl LlmConfig {
    /// Gemini config with default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            backend: LlmBackend::Gemini,
            api_key: SecretString::from(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Read the API key from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the API key through an arbitrary lookup.
    ///
    /// `GEMINI_API_KEY` wins over `API_KEY`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        [API_KEY_ENV, API_KEY_ENV_FALLBACK]
            .into_iter()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(Self::new)
            .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_ENV.to_string()))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reject values the provider cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api_key".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: format!("not an http(s) URL: {}", self.base_url),
            });
        }
        Ok(())
    }
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match config.backend {
        LlmBackend::Gemini => {
            let provider = GeminiProvider::new(config)?;
            tracing::info!("Using Gemini (model: {})", config.model);
            Ok(Arc::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_any_key_constructs() {
        // The key is only checked by the remote service on first request.
        let config = LlmConfig::new("test-key");
        let provider = create_provider(&config);
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().model_name(), DEFAULT_MODEL);
    }

    #[test]
    fn test_create_provider_custom_model() {
        let config = LlmConfig::new("k").with_model("gemini-2.5-pro");
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.model_name(), "gemini-2.5-pro");
    }

    #[test]
    fn from_lookup_prefers_gemini_key() {
        let config = LlmConfig::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("primary".into()),
            "API_KEY" => Some("legacy".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_key.expose_secret(), "primary");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn from_lookup_falls_back_to_legacy_key() {
        let config = LlmConfig::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("   ".into()),
            "API_KEY" => Some("legacy".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_key.expose_secret(), "legacy");
    }

    #[test]
    fn from_lookup_missing_key_errors() {
        let err = LlmConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref k) if k == "GEMINI_API_KEY"));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(LlmConfig::new("k").validate().is_ok());
        assert!(LlmConfig::new(" ").validate().is_err());
        assert!(LlmConfig::new("k").with_model("").validate().is_err());
        assert!(LlmConfig::new("k").with_base_url("ftp://x").validate().is_err());
    }
}
