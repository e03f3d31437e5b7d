use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::domain::draft::DraftError;
use crate::domain::errors::ValidationError;
use crate::domain::repositories::RepositoryError;

/// Stable machine-readable error codes exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    TournamentNotFound,
    ParticipantNotFound,
    ParticipantAlreadyInTournament,
    ParticipantNotInTournament,
    DraftNotStarted,
    DraftAlreadyStarted,
    DraftFinished,
    DraftInProgress,
    NoCaptains,
    NoDraftableParticipants,
    NotACaptain,
    NotYourTurn,
    ParticipantAlreadyClaimed,
    ParticipantOnAnotherTeam,
    CannotNominateCaptain,
    TurnConflict,
    Conflict,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::TournamentNotFound => "TOURNAMENT_NOT_FOUND",
            ErrorCode::ParticipantNotFound => "PARTICIPANT_NOT_FOUND",
            ErrorCode::ParticipantAlreadyInTournament => "PARTICIPANT_ALREADY_IN_TOURNAMENT",
            ErrorCode::ParticipantNotInTournament => "PARTICIPANT_NOT_IN_TOURNAMENT",
            ErrorCode::DraftNotStarted => "DRAFT_NOT_STARTED",
            ErrorCode::DraftAlreadyStarted => "DRAFT_ALREADY_STARTED",
            ErrorCode::DraftFinished => "DRAFT_FINISHED",
            ErrorCode::DraftInProgress => "DRAFT_IN_PROGRESS",
            ErrorCode::NoCaptains => "NO_CAPTAINS",
            ErrorCode::NoDraftableParticipants => "NO_DRAFTABLE_PARTICIPANTS",
            ErrorCode::NotACaptain => "NOT_A_CAPTAIN",
            ErrorCode::NotYourTurn => "NOT_YOUR_TURN",
            ErrorCode::ParticipantAlreadyClaimed => "PARTICIPANT_ALREADY_CLAIMED",
            ErrorCode::ParticipantOnAnotherTeam => "PARTICIPANT_ON_ANOTHER_TEAM",
            ErrorCode::CannotNominateCaptain => "CANNOT_NOMINATE_CAPTAIN",
            ErrorCode::TurnConflict => "TURN_CONFLICT",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the client caused the error or the server did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorClassification {
    BusinessError,
    ServerError,
}

impl ErrorClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClassification::BusinessError => "BUSINESS_ERROR",
            ErrorClassification::ServerError => "SERVER_ERROR",
        }
    }
}

/// Message shown to clients in place of any server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error returned by every use case
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed value-object or entity validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A business rule rejected the operation
    #[error("{message}")]
    Business { code: ErrorCode, message: String },

    /// Anything else; never shown to clients verbatim
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn business(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::Business {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::Business { code, .. } => *code,
            AppError::Unexpected(_) => ErrorCode::InternalError,
        }
    }

    pub fn classification(&self) -> ErrorClassification {
        match self {
            AppError::Validation(_) | AppError::Business { .. } => {
                ErrorClassification::BusinessError
            }
            AppError::Unexpected(_) => ErrorClassification::ServerError,
        }
    }

    /// Message safe to return to a client
    pub fn public_message(&self) -> String {
        match self {
            AppError::Unexpected(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Conflict { message, .. } => {
                AppError::business(ErrorCode::Conflict, message)
            }
            other => AppError::Unexpected(other.to_string()),
        }
    }
}

impl From<DraftError> for AppError {
    fn from(e: DraftError) -> Self {
        let code = match &e {
            DraftError::NotStarted => ErrorCode::DraftNotStarted,
            DraftError::AlreadyStarted => ErrorCode::DraftAlreadyStarted,
            DraftError::Finished => ErrorCode::DraftFinished,
            DraftError::InProgress => ErrorCode::DraftInProgress,
            DraftError::NoCaptains => ErrorCode::NoCaptains,
            DraftError::NoDraftableParticipants => ErrorCode::NoDraftableParticipants,
            DraftError::NotACaptain(_) => ErrorCode::NotACaptain,
            DraftError::NotYourTurn { .. } => ErrorCode::NotYourTurn,
            DraftError::ParticipantNotInTournament(_) => ErrorCode::ParticipantNotInTournament,
            DraftError::CannotNominateCaptain(_) => ErrorCode::CannotNominateCaptain,
            DraftError::AlreadyClaimed(_) => ErrorCode::ParticipantAlreadyClaimed,
            DraftError::OnAnotherTeam(_) => ErrorCode::ParticipantOnAnotherTeam,
            DraftError::Invalid(v) => return AppError::Validation(v.clone()),
        };
        AppError::business(code, e.to_string())
    }
}
