mod assembler;
mod request;

pub use assembler::{build_prompt, build_prompt_from_messages};
pub use request::PromptRequest;
