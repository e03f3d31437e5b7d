use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::{AppError, ErrorClassification, ErrorCode};
use crate::domain::ValidationError;

/// API error with HTTP status, message, error code and classification
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: ErrorCode,
    pub classification: ErrorClassification,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        let classification = if status.is_server_error() {
            ErrorClassification::ServerError
        } else {
            ErrorClassification::BusinessError
        };
        Self {
            status,
            message: message.into(),
            code,
            classification,
        }
    }

    /// Creates a 404 Not Found error
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }
}

/// HTTP status for an application error code
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::TournamentNotFound | ErrorCode::ParticipantNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ParticipantAlreadyInTournament
        | ErrorCode::ParticipantAlreadyClaimed
        | ErrorCode::ParticipantOnAnotherTeam
        | ErrorCode::DraftAlreadyStarted
        | ErrorCode::DraftFinished
        | ErrorCode::DraftInProgress
        | ErrorCode::DraftNotStarted
        | ErrorCode::NotYourTurn
        | ErrorCode::TurnConflict
        | ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::ValidationError
        | ErrorCode::ParticipantNotInTournament
        | ErrorCode::NoCaptains
        | ErrorCode::NoDraftableParticipants
        | ErrorCode::NotACaptain
        | ErrorCode::CannotNominateCaptain => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "code": self.code,
            "classification": self.classification,
        }));

        (self.status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        if let AppError::Unexpected(detail) = &err {
            tracing::error!(error = %detail, "unexpected error in REST handler");
        }
        Self {
            status: status_for(err.code()),
            message: err.public_message(),
            code: err.code(),
            classification: err.classification(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        AppError::from(err).into()
    }
}
