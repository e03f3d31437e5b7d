use async_graphql::{Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::application::use_cases::{DraftState as DraftStateModel, ResetDraftOutcome};
use crate::domain::draft::{Draft as DraftModel, DraftStatus as DraftStatusModel};
use crate::domain::participant::Participant as ParticipantModel;
use crate::domain::tournament::{
    Tournament as TournamentModel, TournamentParticipant as TournamentParticipantModel,
};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DraftStatus {
    Pending,
    Active,
    Done,
}

impl From<DraftStatusModel> for DraftStatus {
    fn from(s: DraftStatusModel) -> Self {
        match s {
            DraftStatusModel::Pending => DraftStatus::Pending,
            DraftStatusModel::Active => DraftStatus::Active,
            DraftStatusModel::Done => DraftStatus::Done,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Tournament {
    pub id: ID,
    pub name: String,
    pub draft_status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

impl From<TournamentModel> for Tournament {
    fn from(t: TournamentModel) -> Self {
        Self {
            id: ID(t.id().to_string()),
            name: t.name().to_string(),
            draft_status: t.draft_status().into(),
            created_at: t.created_at(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Participant {
    pub id: ID,
    pub name: String,
    pub weapon: String,
    pub xp: i32,
    /// Team the participant was drafted onto, if any
    pub team_id: Option<ID>,
    pub created_at: DateTime<Utc>,
}

impl From<ParticipantModel> for Participant {
    fn from(p: ParticipantModel) -> Self {
        Self {
            id: ID(p.id().to_string()),
            name: p.name().to_string(),
            weapon: p.weapon().to_string(),
            xp: p.xp(),
            team_id: p.team_id().map(|t| ID(t.to_string())),
            created_at: p.created_at(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct TournamentParticipant {
    pub id: ID,
    pub tournament_id: ID,
    pub participant_id: ID,
    pub is_captain: bool,
    /// Team led by this member; only set for captains
    pub team_id: Option<ID>,
    pub created_at: DateTime<Utc>,
}

impl From<TournamentParticipantModel> for TournamentParticipant {
    fn from(m: TournamentParticipantModel) -> Self {
        Self {
            id: ID(m.id().to_string()),
            tournament_id: ID(m.tournament_id().to_string()),
            participant_id: ID(m.participant_id().to_string()),
            is_captain: m.is_captain(),
            team_id: m.team_id().map(|t| ID(t.to_string())),
            created_at: m.created_at(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Draft {
    pub id: ID,
    pub tournament_id: ID,
    pub captain_id: ID,
    pub participant_id: ID,
    pub round: i32,
    pub turn: i32,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

impl From<DraftModel> for Draft {
    fn from(d: DraftModel) -> Self {
        Self {
            id: ID(d.id().to_string()),
            tournament_id: ID(d.tournament_id().to_string()),
            captain_id: ID(d.captain_id().to_string()),
            participant_id: ID(d.participant_id().to_string()),
            round: d.round(),
            turn: d.turn(),
            status: d.status().into(),
            created_at: d.created_at(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct DraftState {
    pub tournament_id: ID,
    pub status: DraftStatus,
    pub round: Option<i32>,
    pub turn: Option<i32>,
    pub captain_id: Option<ID>,
    pub picks_made: i32,
    pub remaining: Vec<ID>,
}

impl From<DraftStateModel> for DraftState {
    fn from(s: DraftStateModel) -> Self {
        Self {
            tournament_id: ID(s.tournament_id.to_string()),
            status: s.status.into(),
            round: s.round,
            turn: s.turn,
            captain_id: s.captain_id.map(|c| ID(c.to_string())),
            picks_made: i32::try_from(s.picks_made).unwrap_or(i32::MAX),
            remaining: s.remaining.iter().map(|p| ID(p.to_string())).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct ResetDraftResult {
    pub tournament_id: ID,
    pub removed: i32,
}

impl From<ResetDraftOutcome> for ResetDraftResult {
    fn from(o: ResetDraftOutcome) -> Self {
        Self {
            tournament_id: ID(o.tournament_id.to_string()),
            removed: i32::try_from(o.removed).unwrap_or(i32::MAX),
        }
    }
}

#[derive(InputObject)]
pub struct CreateTournamentInput {
    pub name: String,
}

#[derive(InputObject)]
pub struct CreateParticipantInput {
    pub name: String,
    pub weapon: String,
    #[graphql(default)]
    pub xp: i32,
}

#[derive(InputObject)]
pub struct MembershipInput {
    pub tournament_id: ID,
    pub participant_id: ID,
    #[graphql(default)]
    pub is_captain: bool,
}

#[derive(InputObject)]
pub struct TournamentDraftInput {
    pub tournament_id: ID,
}

#[derive(InputObject)]
pub struct NominateParticipantInput {
    pub tournament_id: ID,
    pub captain_id: ID,
    pub participant_id: ID,
}
