use crate::domain::{AppError, UserId};
use crate::ports::{Source, SourceContent, is_visible_to};

/// A fixed block of text, optionally owned by one user.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
    owner: Option<UserId>,
}

impl TextSource {
    /// Unowned text, visible to every requesting user.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), owner: None }
    }

    /// Text that only `owner` may read.
    pub fn owned_by(text: impl Into<String>, owner: UserId) -> Self {
        Self { text: text.into(), owner: Some(owner) }
    }
}

impl Source for TextSource {
    fn content(
        &self,
        requesting_user: Option<&UserId>,
        skip_unauthorized: bool,
    ) -> Result<SourceContent, AppError> {
        let owner = self.owner.as_ref().map(UserId::as_str);
        if is_visible_to(owner, requesting_user) {
            return Ok(SourceContent::Authorized(self.text.clone()));
        }

        if !skip_unauthorized {
            return Err(AppError::Unauthorized {
                owner: owner.map(str::to_string),
                requesting_user: requesting_user.map(UserId::to_string).unwrap_or_default(),
            });
        }

        Ok(SourceContent::Withheld { visible: None, withheld: 1, owner: owner.map(str::to_string) })
    }
}
