use std::fs;
use std::path::Path;

use url::Url;

use crate::domain::{AppError, PromptGuardConfig};

pub const GUARD_URL_ENV: &str = "LLM_GUARD_URL";
pub const GUARD_API_KEY_ENV: &str = "LLM_GUARD_API_KEY";

/// Load prompt guard settings from an optional TOML file, then overlay the
/// `LLM_GUARD_URL` / `LLM_GUARD_API_KEY` environment variables.
pub fn load_guard_config(path: Option<&Path>) -> Result<PromptGuardConfig, AppError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|err| {
                AppError::config_error(format!(
                    "Failed to read prompt guard config {}: {}",
                    path.display(),
                    err
                ))
            })?;
            parse_guard_config(&content)?
        }
        None => PromptGuardConfig::default(),
    };

    let config = apply_env_overrides(config, |name| std::env::var(name).ok())?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_guard_config(content: &str) -> Result<PromptGuardConfig, AppError> {
    let config: PromptGuardConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn apply_env_overrides<F>(
    mut config: PromptGuardConfig,
    lookup: F,
) -> Result<PromptGuardConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(GUARD_URL_ENV).filter(|value| !value.trim().is_empty()) {
        config.api_url = Url::parse(raw.trim()).map_err(|err| {
            AppError::config_error(format!("{} is not a valid URL: {}", GUARD_URL_ENV, err))
        })?;
    }
    if let Some(key) = lookup(GUARD_API_KEY_ENV).filter(|value| !value.trim().is_empty()) {
        config.api_key = Some(key);
    }
    Ok(config)
}
