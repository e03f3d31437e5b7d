use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::application::use_cases::CreateParticipantCommand;
use crate::application::ErrorCode;
use crate::domain::participant::Participant;
use crate::domain::shared::ParticipantId;
use crate::state::AppState;

/// Request body for registering a participant
#[derive(Debug, Deserialize)]
pub struct CreateParticipantRequest {
    pub name: String,
    pub weapon: String,
    #[serde(default)]
    pub xp: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParticipantResponse {
    pub id: String,
    pub name: String,
    pub weapon: String,
    pub xp: i32,
    pub team_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Participant> for ParticipantResponse {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id().to_string(),
            name: p.name().to_string(),
            weapon: p.weapon().to_string(),
            xp: p.xp(),
            team_id: p.team_id().map(|t| t.to_string()),
            created_at: p.created_at(),
        }
    }
}

/// POST /api/participants
pub async fn create_participant(
    State(state): State<AppState>,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantResponse>), ApiError> {
    let participant = state
        .use_cases()
        .create_participant
        .execute(CreateParticipantCommand {
            name: req.name,
            weapon: req.weapon,
            xp: req.xp,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ParticipantResponse::from(&participant))))
}

/// GET /api/participants
pub async fn list_participants(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParticipantResponse>>, ApiError> {
    let participants = state.use_cases().get_participants.execute().await?;
    Ok(Json(participants.iter().map(ParticipantResponse::from).collect()))
}

/// GET /api/participants/{id}
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ParticipantResponse>, ApiError> {
    let id = ParticipantId::reconstruct(id)?;
    let participant = state
        .use_cases()
        .get_participant
        .execute(&id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(
                ErrorCode::ParticipantNotFound,
                format!("Participant not found: {}", id),
            )
        })?;

    Ok(Json(ParticipantResponse::from(&participant)))
}
