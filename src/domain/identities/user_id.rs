use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated user identity.
///
/// Used both for the requesting user of an assembly call and for the owner
/// recorded on a source. Two identities match only when their strings are
/// exactly equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl_validated_id!(UserId, AppError::InvalidUserId);

impl From<UserId> for String {
    fn from(val: UserId) -> Self {
        val.0
    }
}

impl std::str::FromStr for UserId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::new(s)
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserId::new(&s).map_err(serde::de::Error::custom)
    }
}
