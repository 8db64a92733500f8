use crate::domain::AppError;
use crate::ports::PromptFilter;

/// Appends a fixed suffix, making filter order visible in the output.
pub struct AppendFilter {
    suffix: String,
}

impl AppendFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self { suffix: suffix.into() }
    }
}

impl PromptFilter for AppendFilter {
    fn name(&self) -> &str {
        "append"
    }

    fn filter(&self, mut prompt: String) -> Result<String, AppError> {
        prompt.push_str(&self.suffix);
        Ok(prompt)
    }
}
