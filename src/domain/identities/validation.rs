/// Validates a user identifier string.
///
/// Checks:
/// - Non-empty
/// - No leading or trailing whitespace
/// - No control characters (including null bytes)
///
/// Identifiers are otherwise opaque: emails, UUIDs and `user2` style handles
/// are all accepted and compared byte-for-byte.
pub fn validate_user_identifier(id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.trim() != id {
        return false;
    }
    !id.chars().any(char::is_control)
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(id: &str) -> Result<Self, $crate::domain::AppError> {
                if $crate::domain::identities::validation::validate_user_identifier(id) {
                    Ok(Self(id.to_string()))
                } else {
                    Err($err_variant(id.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
