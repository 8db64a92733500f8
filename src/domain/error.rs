use std::collections::BTreeMap;
use std::io;

use thiserror::Error;

/// Library-wide error type for prompt assembly.
#[derive(Debug, Error)]
pub enum AppError {
    /// A source denied its content to the requesting user.
    #[error(
        "User '{requesting_user}' is not authorized to read content owned by {}",
        .owner.as_deref().unwrap_or("another user")
    )]
    Unauthorized { owner: Option<String>, requesting_user: String },

    /// Malformed call shape (no derivable instruction, bad history).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A filter judged the rendered prompt unsafe.
    #[error("Prompt rejected by filter '{filter}'{}", format_diagnostics(.diagnostics))]
    FilterRejected { filter: String, diagnostics: BTreeMap<String, f64> },

    /// The template engine failed to render.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// Transport or protocol failure talking to the prompt scanning service.
    #[error("Prompt scanner request failed: {message}")]
    ScannerService { message: String, status: Option<u16> },

    /// User identifier is invalid.
    #[error("Invalid user identifier '{0}': must be non-empty without surrounding whitespace")]
    InvalidUserId(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of [`AppError`] for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    InvalidInput,
    FilterRejected,
    Other,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Unauthorized { .. } => ErrorKind::Unauthorized,
            AppError::InvalidInput(_) | AppError::InvalidUserId(_) => ErrorKind::InvalidInput,
            AppError::FilterRejected { .. } => ErrorKind::FilterRejected,
            AppError::TemplateRender { .. }
            | AppError::ScannerService { .. }
            | AppError::Configuration(_)
            | AppError::Io(_)
            | AppError::TomlParse(_)
            | AppError::Json(_) => ErrorKind::Other,
        }
    }
}

fn format_diagnostics(diagnostics: &BTreeMap<String, f64>) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }
    let scores: Vec<String> =
        diagnostics.iter().map(|(check, score)| format!("{}={}", check, score)).collect();
    format!(" ({})", scores.join(", "))
}
