use crate::domain::AppError;
use crate::ports::PromptFilter;

/// Passes prompt text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFilter;

impl PromptFilter for NoopFilter {
    fn name(&self) -> &str {
        "noop"
    }

    fn filter(&self, prompt: String) -> Result<String, AppError> {
        Ok(prompt)
    }
}
