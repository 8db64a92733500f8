mod guard_config;

pub use guard_config::{DEFAULT_API_URL, PromptGuardConfig};
