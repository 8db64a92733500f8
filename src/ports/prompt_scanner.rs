//! Prompt scanning service port.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::AppError;

/// Verdict returned by a prompt scanning service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanReport {
    pub is_valid: bool,
    /// Per-check scores keyed by scanner name.
    #[serde(default)]
    pub scanners: BTreeMap<String, f64>,
}

/// Port for scanning prompt text before it reaches a model.
pub trait PromptScanner {
    fn scan(&self, text: &str) -> Result<ScanReport, AppError>;
}
