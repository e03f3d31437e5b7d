use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftStatus {
    Pending,
    Active,
    Done,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub draft_status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub weapon: String,
    pub xp: i32,
    pub team_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentParticipant {
    pub id: String,
    pub tournament_id: String,
    pub participant_id: String,
    pub is_captain: bool,
    pub team_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    pub tournament_id: String,
    pub captain_id: String,
    pub participant_id: String,
    pub round: i32,
    pub turn: i32,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    pub tournament_id: String,
    pub status: DraftStatus,
    pub round: Option<i32>,
    pub turn: Option<i32>,
    pub captain_id: Option<String>,
    pub picks_made: i32,
    pub remaining: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetDraft {
    pub tournament_id: String,
    pub removed: i32,
}
