use thiserror::Error;

/// Raised when a value object or entity is built from invalid input
///
/// Validation failures are never recovered inside the domain; they surface
/// to the caller as business errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyValue { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must not contain '{character}'")]
    ForbiddenCharacter {
        field: &'static str,
        character: char,
    },

    #[error("xp must not be negative, got {0}")]
    NegativeXp(i32),

    #[error("{field} must be a positive integer, got {value}")]
    InvalidPosition { field: &'static str, value: i32 },

    #[error("unknown draft status: {0}")]
    UnknownStatus(String),
}
