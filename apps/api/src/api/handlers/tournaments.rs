use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::application::use_cases::MembershipCommand;
use crate::application::ErrorCode;
use crate::domain::draft::DraftStatus;
use crate::domain::shared::{ParticipantId, TournamentId};
use crate::domain::tournament::{Tournament, TournamentParticipant};
use crate::state::AppState;

/// Request body for creating a tournament
#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TournamentResponse {
    pub id: String,
    pub name: String,
    pub draft_status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Tournament> for TournamentResponse {
    fn from(t: &Tournament) -> Self {
        Self {
            id: t.id().to_string(),
            name: t.name().to_string(),
            draft_status: t.draft_status(),
            created_at: t.created_at(),
        }
    }
}

/// Request body for adding a participant to a tournament
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub participant_id: String,
    #[serde(default)]
    pub is_captain: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetCaptainRequest {
    pub is_captain: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub tournament_id: String,
    pub participant_id: String,
    pub is_captain: bool,
    pub team_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&TournamentParticipant> for MemberResponse {
    fn from(m: &TournamentParticipant) -> Self {
        Self {
            id: m.id().to_string(),
            tournament_id: m.tournament_id().to_string(),
            participant_id: m.participant_id().to_string(),
            is_captain: m.is_captain(),
            team_id: m.team_id().map(|t| t.to_string()),
            created_at: m.created_at(),
        }
    }
}

/// Create a new tournament
///
/// POST /api/tournaments
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<TournamentResponse>), ApiError> {
    let tournament = state.use_cases().create_tournament.execute(&req.name).await?;
    Ok((StatusCode::CREATED, Json(TournamentResponse::from(&tournament))))
}

/// GET /api/tournaments
pub async fn list_tournaments(
    State(state): State<AppState>,
) -> Result<Json<Vec<TournamentResponse>>, ApiError> {
    let tournaments = state.use_cases().get_tournaments.execute().await?;
    Ok(Json(tournaments.iter().map(TournamentResponse::from).collect()))
}

/// Get a tournament by ID
///
/// GET /api/tournaments/{id}
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TournamentResponse>, ApiError> {
    let id = TournamentId::reconstruct(id)?;
    let tournament = state
        .use_cases()
        .get_tournament
        .execute(&id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(
                ErrorCode::TournamentNotFound,
                format!("Tournament not found: {}", id),
            )
        })?;

    Ok(Json(TournamentResponse::from(&tournament)))
}

/// POST /api/tournaments/{id}/participants
pub async fn add_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let command = MembershipCommand {
        tournament_id: TournamentId::reconstruct(id)?,
        participant_id: ParticipantId::reconstruct(req.participant_id)?,
        is_captain: req.is_captain,
    };
    let member = state.use_cases().add_participant.execute(command).await?;
    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}

/// GET /api/tournaments/{id}/participants
pub async fn list_members(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let id = TournamentId::reconstruct(id)?;
    let members = state
        .use_cases()
        .get_tournament_participants
        .execute(&id)
        .await?;
    Ok(Json(members.iter().map(MemberResponse::from).collect()))
}

/// PUT /api/tournaments/{id}/participants/{participant_id}/captain
pub async fn set_captain(
    State(state): State<AppState>,
    Path((id, participant_id)): Path<(String, String)>,
    Json(req): Json<SetCaptainRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let command = MembershipCommand {
        tournament_id: TournamentId::reconstruct(id)?,
        participant_id: ParticipantId::reconstruct(participant_id)?,
        is_captain: req.is_captain,
    };
    let member = state.use_cases().set_captain.execute(command).await?;
    Ok(Json(MemberResponse::from(&member)))
}
