//! Content source port.

use crate::domain::{AppError, UserId};

/// What a source hands back when probed for a requesting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceContent {
    /// Every piece of the source is visible to the requesting user.
    Authorized(String),
    /// Some or all content was withheld. Only produced when the caller asked
    /// to skip unauthorized content instead of failing.
    Withheld {
        /// Content that remains visible, if any.
        visible: Option<String>,
        /// Number of withheld items.
        withheld: usize,
        /// Owner of the first withheld item.
        owner: Option<String>,
    },
}

impl SourceContent {
    /// Content that may be shown to the requesting user.
    pub fn visible(&self) -> Option<&str> {
        match self {
            SourceContent::Authorized(text) => Some(text),
            SourceContent::Withheld { visible, .. } => visible.as_deref(),
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, SourceContent::Authorized(_))
    }
}

/// A provider of prompt content scoped to owner identities.
///
/// Contract:
/// - With no requesting user, all content is returned.
/// - Content without an owner is visible to everyone.
/// - Content owned by someone other than the requesting user is never
///   returned. With `skip_unauthorized == false` the call fails with
///   [`AppError::Unauthorized`]; otherwise the content is left out and the
///   omission is reported through [`SourceContent::Withheld`].
pub trait Source {
    fn content(
        &self,
        requesting_user: Option<&UserId>,
        skip_unauthorized: bool,
    ) -> Result<SourceContent, AppError>;
}

/// Whether `requesting_user` may read content owned by `owner`.
pub fn is_visible_to(owner: Option<&str>, requesting_user: Option<&UserId>) -> bool {
    match (owner, requesting_user) {
        (Some(owner), Some(user)) => owner == user.as_str(),
        _ => true,
    }
}
