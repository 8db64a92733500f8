//! Prompt template port.

use crate::domain::AppError;

/// Renders a prompt body from the instruction, examples and authorized
/// source content.
///
/// Implementations must be deterministic: the same inputs always render the
/// same text.
pub trait PromptTemplate {
    fn render(
        &self,
        instruction: &str,
        examples: &[String],
        source_content: &[String],
    ) -> Result<String, AppError>;
}
