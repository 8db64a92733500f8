mod prompt_filter;
mod prompt_scanner;
mod prompt_template;
mod source;

pub use prompt_filter::PromptFilter;
pub use prompt_scanner::{PromptScanner, ScanReport};
pub use prompt_template::PromptTemplate;
pub use source::{Source, SourceContent, is_visible_to};
