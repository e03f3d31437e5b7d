use thiserror::Error;

use crate::domain::errors::ValidationError;

/// Which uniqueness rule a rejected write ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// The tournament already has a nomination at this `(round, turn)`
    DraftTurn,
    /// The participant was already nominated in this tournament
    DraftedParticipant,
    /// Any other unique key
    Duplicate,
}

/// Failures reported by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A uniqueness rule of the store was violated
    #[error("conflict: {message}")]
    Conflict { kind: ConflictKind, message: String },

    /// The store failed or was unreachable
    #[error("storage error: {0}")]
    Storage(String),

    /// A stored row no longer satisfies domain validation
    #[error("corrupt record: {0}")]
    Corrupt(#[from] ValidationError),
}

impl RepositoryError {
    pub fn conflict(kind: ConflictKind, message: impl Into<String>) -> Self {
        RepositoryError::Conflict {
            kind,
            message: message.into(),
        }
    }
}
