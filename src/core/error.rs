//! Rule engine errors.

use super::Choice;

/// Errors raised when input falls outside the option encoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("letter '{0}' must be one of r, p, s (case-insensitive)")]
    InvalidLetter(char),

    #[error("option index {0} must be 0, 1 or 2")]
    InvalidIndex(i64),

    #[error("distribution has no weight for {0}")]
    MissingWeight(Choice),
}
