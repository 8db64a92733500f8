//! Prompt scanning client for an LLM Guard style HTTP service.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::domain::{AppError, PromptGuardConfig};
use crate::ports::{PromptScanner, ScanReport};

const ANALYZE_PROMPT_PATH: [&str; 2] = ["analyze", "prompt"];
const DEFAULT_STATUS_MESSAGE: &str = "Prompt scanner request failed";

/// HTTP transport for the prompt scanning service.
///
/// One request per scan. Retries and availability handling are left to the
/// caller.
#[derive(Clone)]
pub struct HttpPromptGuard {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpPromptGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPromptGuard")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpPromptGuard {
    /// Create a client from explicit configuration. The API key is required.
    pub fn new(config: &PromptGuardConfig) -> Result<Self, AppError> {
        config.validate()?;
        let api_key = config.require_api_key()?.to_string();
        let endpoint = analyze_endpoint(&config.api_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ScannerService {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, endpoint, client })
    }

    fn send_request(&self, request: &ScanRequest<'_>) -> Result<ScanReport, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::ScannerService {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| AppError::ScannerService {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 401 || status.as_u16() == 403 {
                "Scanner rejected the API key".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::ScannerService { message, status: Some(status.as_u16()) })
    }
}

impl PromptScanner for HttpPromptGuard {
    fn scan(&self, text: &str) -> Result<ScanReport, AppError> {
        tracing::debug!(endpoint = %self.endpoint, chars = text.len(), "scanning prompt");
        let report = self.send_request(&ScanRequest { prompt: text })?;
        tracing::debug!(
            is_valid = report.is_valid,
            checks = report.scanners.len(),
            "scan finished"
        );
        Ok(report)
    }
}

#[derive(Debug, Serialize)]
struct ScanRequest<'a> {
    prompt: &'a str,
}

/// Appends the analyze path to the base path; query and fragment stay put.
fn analyze_endpoint(base: &Url) -> Result<Url, AppError> {
    let mut endpoint = base.clone();
    endpoint
        .path_segments_mut()
        .map_err(|_| {
            AppError::config_error(format!("Invalid prompt guard URL '{}': not a base URL", base))
        })?
        .pop_if_empty()
        .extend(ANALYZE_PROMPT_PATH);
    Ok(endpoint)
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed.get("detail").and_then(|detail| detail.as_str()) {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
