//! Post-render filter port.

use crate::domain::AppError;

/// Transforms or validates rendered prompt text.
///
/// Filters run in order; each receives the previous filter's output. A
/// filter that judges the text unsafe returns [`AppError::FilterRejected`].
pub trait PromptFilter {
    /// Short name used in logs and rejection errors.
    fn name(&self) -> &str;

    fn filter(&self, prompt: String) -> Result<String, AppError>;
}
