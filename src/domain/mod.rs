pub mod configuration;
pub mod error;
pub mod identities;
pub mod message;
pub mod policy;
pub mod prompt;

pub use configuration::{DEFAULT_API_URL, PromptGuardConfig};
pub use error::{AppError, ErrorKind};
pub use identities::UserId;
pub use message::{ChatMessage, ChatRole, ConversationMessage, Role};
pub use policy::AccessControlPolicy;
pub use prompt::{Prompt, PromptDocument};
