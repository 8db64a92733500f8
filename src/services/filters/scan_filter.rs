use crate::domain::AppError;
use crate::ports::{PromptFilter, PromptScanner};

/// Rejects prompts that a [`PromptScanner`] reports as invalid.
///
/// The text is never modified. On rejection the scanner's per-check scores are
/// carried in [`AppError::FilterRejected`].
#[derive(Debug, Clone)]
pub struct ScanFilter<S> {
    name: String,
    scanner: S,
}

impl<S: PromptScanner> ScanFilter<S> {
    pub fn new(name: impl Into<String>, scanner: S) -> Self {
        Self { name: name.into(), scanner }
    }
}

impl<S: PromptScanner> PromptFilter for ScanFilter<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn filter(&self, prompt: String) -> Result<String, AppError> {
        let report = self.scanner.scan(&prompt)?;
        if !report.is_valid {
            return Err(AppError::FilterRejected {
                filter: self.name.clone(),
                diagnostics: report.scanners,
            });
        }
        Ok(prompt)
    }
}
