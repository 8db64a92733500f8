use crate::domain::{AppError, UserId};
use crate::ports::{Source, SourceContent};

/// Source that fails with `Unauthorized` for any requesting user, even when
/// asked to skip.
pub struct DenyingSource;

impl Source for DenyingSource {
    fn content(
        &self,
        requesting_user: Option<&UserId>,
        _skip_unauthorized: bool,
    ) -> Result<SourceContent, AppError> {
        match requesting_user {
            Some(user) => Err(AppError::Unauthorized {
                owner: None,
                requesting_user: user.to_string(),
            }),
            None => Ok(SourceContent::Authorized("denied content".to_string())),
        }
    }
}
