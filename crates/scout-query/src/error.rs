//! Error types for the scout-query crate.

use thiserror::Error;

/// Errors that can occur when building or compiling queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Operator token has no clause rule.
    #[error("unsupported operator '{op}'")]
    UnsupportedOperator { op: String },

    /// Condition operand does not fit its kind.
    #[error("malformed condition on '{field}': {reason}")]
    MalformedCondition { field: String, reason: &'static str },
}

impl QueryError {
    pub(crate) fn malformed(field: &str, reason: &'static str) -> Self {
        QueryError::MalformedCondition {
            field: field.to_string(),
            reason,
        }
    }
}

/// Result type for scout-query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
