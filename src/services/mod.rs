pub mod filters;
mod minijinja_template;
mod prompt_assembly;
mod prompt_guard_http;
pub mod sources;

pub use filters::{NoopFilter, ScanFilter};
pub use minijinja_template::MinijinjaTemplate;
pub use prompt_assembly::{PromptRequest, build_prompt, build_prompt_from_messages};
pub use prompt_guard_http::HttpPromptGuard;
pub use sources::{DEFAULT_OWNER_KEY, Document, DocumentCollectionSource, TextSource};
