//! Prompt scanning service configuration.

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Connection settings for the prompt scanning service.
///
/// Built explicitly by the caller (see `app::config`); the scanner never reads
/// the process environment on its own.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptGuardConfig {
    /// Base URL of the scanning service.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Bearer token sent with every scan request.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for PromptGuardConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), api_key: None, timeout_secs: default_timeout() }
    }
}

impl std::fmt::Debug for PromptGuardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptGuardConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl PromptGuardConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.api_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            return Err(AppError::config_error("api_key must not be empty when set"));
        }
        Ok(())
    }

    /// The API key, or a configuration error naming the missing setting.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::config_error("Prompt guard API key is not configured (LLM_GUARD_API_KEY)")
        })
    }
}

/// Default for a scanning service running as a local container.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_container() {
        let config = PromptGuardConfig::default();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let config: PromptGuardConfig =
            toml::from_str("api_url = \"http://guard.internal:9000\"\napi_key = \"secret\"")
                .unwrap();
        assert_eq!(config.api_url.host_str(), Some("guard.internal"));
        assert_eq!(config.require_api_key().unwrap(), "secret");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed: Result<PromptGuardConfig, _> = toml::from_str("retries = 3");
        assert!(parsed.is_err());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = PromptGuardConfig { timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let err = PromptGuardConfig::default().require_api_key().unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_key() {
        let config = PromptGuardConfig { api_key: Some("secret".into()), ..Default::default() };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
