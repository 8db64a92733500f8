use crate::domain::AppError;

/// How the assembler reacts when a source withholds content from the
/// requesting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessControlPolicy {
    /// Any withheld content aborts the whole assembly with `Unauthorized`.
    #[default]
    EnforceAll,
    /// Withheld content is left out and assembly continues.
    SkipUnauthorized,
}

impl AccessControlPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessControlPolicy::EnforceAll => "enforce-all",
            AccessControlPolicy::SkipUnauthorized => "skip-unauthorized",
        }
    }
}

impl std::str::FromStr for AccessControlPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enforce-all" | "enforce_all" => Ok(AccessControlPolicy::EnforceAll),
            "skip-unauthorized" | "skip_unauthorized" => Ok(AccessControlPolicy::SkipUnauthorized),
            other => Err(AppError::invalid_input(format!(
                "Unknown access control policy '{}': expected enforce-all or skip-unauthorized",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AccessControlPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enforces() {
        assert_eq!(AccessControlPolicy::default(), AccessControlPolicy::EnforceAll);
    }

    #[test]
    fn parses_both_spellings() {
        assert_eq!(
            "skip_unauthorized".parse::<AccessControlPolicy>().unwrap(),
            AccessControlPolicy::SkipUnauthorized
        );
        assert_eq!(
            "enforce-all".parse::<AccessControlPolicy>().unwrap(),
            AccessControlPolicy::EnforceAll
        );
        assert!("lenient".parse::<AccessControlPolicy>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for policy in [AccessControlPolicy::EnforceAll, AccessControlPolicy::SkipUnauthorized] {
            assert_eq!(policy.to_string().parse::<AccessControlPolicy>().unwrap(), policy);
        }
    }
}
