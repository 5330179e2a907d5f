//! Recognition of the server's "missing target id" error.
//!
//! Deleting or undoing something that is already gone is reported by the
//! server as a GraphQL error. Deletion operations turn that error into
//! [`DeleteOutcome::AlreadyAbsent`] so callers can treat removal as
//! idempotent.

use fedigraph_common::{ClientError, ClientResult, ErrorConfig};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static DEFAULT_SIGNATURE: LazyLock<MissingTargetSignature> = LazyLock::new(|| {
    MissingTargetSignature::from_config(&ErrorConfig::default())
        .expect("default missing-target pattern compiles")
});

/// Result of a deletion or undo operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server removed the target.
    Removed,
    /// The target did not exist, so there was nothing to remove.
    AlreadyAbsent,
}

impl DeleteOutcome {
    #[must_use]
    pub const fn is_removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// Codes and message pattern identifying the missing-target error.
#[derive(Debug, Clone)]
pub struct MissingTargetSignature {
    codes: Vec<String>,
    pattern: Regex,
}

impl MissingTargetSignature {
    /// Build the signature from the `[errors]` configuration table.
    pub fn from_config(config: &ErrorConfig) -> ClientResult<Self> {
        let pattern = Regex::new(&config.missing_target_pattern).map_err(|e| {
            ClientError::Config(format!("invalid errors.missing_target_pattern: {e}"))
        })?;
        Ok(Self {
            codes: config.missing_target_codes.clone(),
            pattern,
        })
    }

    /// Whether `err` is the missing-target error.
    ///
    /// Only GraphQL errors can match: one of them must carry a configured
    /// `extensions.code` or have a message matching the pattern.
    #[must_use]
    pub fn matches(&self, err: &ClientError) -> bool {
        err.graphql_errors().iter().any(|e| {
            e.code().is_some_and(|code| self.codes.iter().any(|c| c == code))
                || self.pattern.is_match(&e.message)
        })
    }
}

impl Default for MissingTargetSignature {
    fn default() -> Self {
        DEFAULT_SIGNATURE.clone()
    }
}

/// Whether `err` is the missing-target error under the default signature.
#[must_use]
pub fn is_missing_target_id(err: &ClientError) -> bool {
    DEFAULT_SIGNATURE.matches(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedigraph_common::GraphQlError;

    fn graphql(errors: Vec<GraphQlError>) -> ClientError {
        ClientError::GraphQl(errors)
    }

    #[test]
    fn test_matches_code() {
        let err = graphql(vec![GraphQlError::new("Not here").with_code("MISSING_TARGET_ID")]);
        assert!(is_missing_target_id(&err));
    }

    #[test]
    fn test_matches_message() {
        let err = graphql(vec![GraphQlError::new("Missing target ID for unlike")]);
        assert!(is_missing_target_id(&err));
    }

    #[test]
    fn test_other_graphql_error() {
        let err = graphql(vec![GraphQlError::new("Forbidden").with_code("FORBIDDEN")]);
        assert!(!is_missing_target_id(&err));

        let err = graphql(vec![GraphQlError::new("missing targets list")]);
        assert!(!is_missing_target_id(&err));
    }

    #[test]
    fn test_non_graphql_errors() {
        assert!(!is_missing_target_id(&ClientError::Closed));
        assert!(!is_missing_target_id(&ClientError::Status {
            status: 404,
            body: "missing target id".to_string(),
        }));
        assert!(!is_missing_target_id(&ClientError::Validation(
            "missing target id".to_string()
        )));
    }

    #[test]
    fn test_any_error_in_list() {
        let err = graphql(vec![
            GraphQlError::new("Rate limited"),
            GraphQlError::new("gone").with_code("MISSING_TARGET_ID"),
        ]);
        assert!(is_missing_target_id(&err));
    }

    #[test]
    fn test_custom_signature() {
        let config = ErrorConfig {
            missing_target_codes: vec!["NOT_FOUND".to_string()],
            missing_target_pattern: r"(?i)does not exist".to_string(),
        };
        let signature = MissingTargetSignature::from_config(&config).unwrap();

        assert!(signature.matches(&graphql(vec![GraphQlError::new("x").with_code("NOT_FOUND")])));
        assert!(signature.matches(&graphql(vec![GraphQlError::new("Note does not exist")])));
        assert!(!signature.matches(&graphql(vec![
            GraphQlError::new("gone").with_code("MISSING_TARGET_ID")
        ])));
    }

    #[test]
    fn test_invalid_pattern() {
        let config = ErrorConfig {
            missing_target_codes: Vec::new(),
            missing_target_pattern: "(".to_string(),
        };
        assert!(matches!(
            MissingTargetSignature::from_config(&config),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_delete_outcome() {
        assert!(DeleteOutcome::Removed.is_removed());
        assert!(!DeleteOutcome::AlreadyAbsent.is_removed());
    }
}
