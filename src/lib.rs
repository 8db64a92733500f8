//! infeready: assemble LLM prompts from owned content without leaking it.
//!
//! Sources are checked against the requesting user before anything is
//! rendered. An [`AccessControlPolicy`] decides whether withheld content fails
//! the call or is left out. The rendered text then passes through the filter
//! chain and is returned as a [`Prompt`].
//!
//! ```no_run
//! use infeready::{AccessControlPolicy, ConversationMessage, PromptRequest, TextSource, UserId};
//!
//! # fn main() -> Result<(), infeready::AppError> {
//! let request = PromptRequest::new()
//!     .with_source(TextSource::owned_by("password is YYY", UserId::new("user2")?))
//!     .for_user(UserId::new("user2")?)
//!     .with_policy(AccessControlPolicy::SkipUnauthorized);
//!
//! let prompt = infeready::build_prompt_from_messages(
//!     vec![ConversationMessage::user("What do I know as a user?")],
//!     None,
//!     &request,
//! )?;
//! println!("{}", prompt);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{
    AccessControlPolicy, AppError, ChatMessage, ChatRole, ConversationMessage, ErrorKind, Prompt,
    PromptDocument, PromptGuardConfig, Role, UserId,
};
pub use ports::{PromptFilter, PromptScanner, PromptTemplate, ScanReport, Source, SourceContent};
pub use services::{
    DEFAULT_OWNER_KEY, Document, DocumentCollectionSource, HttpPromptGuard, MinijinjaTemplate,
    NoopFilter, PromptRequest, ScanFilter, TextSource, build_prompt, build_prompt_from_messages,
};
