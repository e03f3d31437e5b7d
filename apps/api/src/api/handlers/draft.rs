use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::application::use_cases::{DraftState, NominateParticipantCommand, ResetDraftOutcome};
use crate::domain::draft::{Draft, DraftStatus};
use crate::domain::shared::{ParticipantId, TournamentId};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NominateRequest {
    pub captain_id: String,
    pub participant_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftResponse {
    pub id: String,
    pub tournament_id: String,
    pub captain_id: String,
    pub participant_id: String,
    pub round: i32,
    pub turn: i32,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Draft> for DraftResponse {
    fn from(d: &Draft) -> Self {
        Self {
            id: d.id().to_string(),
            tournament_id: d.tournament_id().to_string(),
            captain_id: d.captain_id().to_string(),
            participant_id: d.participant_id().to_string(),
            round: d.round(),
            turn: d.turn(),
            status: d.status(),
            created_at: d.created_at(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftStateResponse {
    pub tournament_id: String,
    pub status: DraftStatus,
    pub round: Option<i32>,
    pub turn: Option<i32>,
    pub captain_id: Option<String>,
    pub picks_made: usize,
    pub remaining: Vec<String>,
}

impl From<DraftState> for DraftStateResponse {
    fn from(s: DraftState) -> Self {
        Self {
            tournament_id: s.tournament_id.to_string(),
            status: s.status,
            round: s.round,
            turn: s.turn,
            captain_id: s.captain_id.map(|c| c.to_string()),
            picks_made: s.picks_made,
            remaining: s.remaining.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetDraftResponse {
    pub tournament_id: String,
    pub removed: u64,
}

impl From<ResetDraftOutcome> for ResetDraftResponse {
    fn from(o: ResetDraftOutcome) -> Self {
        Self {
            tournament_id: o.tournament_id.to_string(),
            removed: o.removed,
        }
    }
}

/// Open the draft at round 1, turn 1
///
/// POST /api/tournaments/{id}/draft/start
pub async fn start_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DraftStateResponse>, ApiError> {
    let id = TournamentId::reconstruct(id)?;
    let snapshot = state.use_cases().start_draft.execute(&id).await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/tournaments/{id}/draft/nominations
pub async fn nominate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<NominateRequest>,
) -> Result<(StatusCode, Json<DraftResponse>), ApiError> {
    let command = NominateParticipantCommand {
        tournament_id: TournamentId::reconstruct(id)?,
        captain_id: ParticipantId::reconstruct(req.captain_id)?,
        participant_id: ParticipantId::reconstruct(req.participant_id)?,
    };
    let draft = state.use_cases().nominate.execute(command).await?;
    Ok((StatusCode::CREATED, Json(DraftResponse::from(&draft))))
}

/// Clear every pick and return the draft to pending
///
/// DELETE /api/tournaments/{id}/draft
pub async fn reset_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResetDraftResponse>, ApiError> {
    let id = TournamentId::reconstruct(id)?;
    let outcome = state.use_cases().reset_draft.execute(&id).await?;
    Ok(Json(outcome.into()))
}

/// GET /api/tournaments/{id}/draft
pub async fn list_drafts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DraftResponse>>, ApiError> {
    let id = TournamentId::reconstruct(id)?;
    let drafts = state.use_cases().get_drafts.execute(&id).await?;
    Ok(Json(drafts.iter().map(DraftResponse::from).collect()))
}

/// GET /api/tournaments/{id}/draft/state
pub async fn draft_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DraftStateResponse>, ApiError> {
    let id = TournamentId::reconstruct(id)?;
    let snapshot = state.use_cases().get_draft_state.execute(&id).await?;
    Ok(Json(snapshot.into()))
}
