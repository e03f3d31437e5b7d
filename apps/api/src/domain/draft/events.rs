use crate::domain::shared::{ParticipantId, TournamentId};

/// Domain events emitted by the draft flow
///
/// Published to the log by the use cases; they do not drive persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEvent {
    /// Draft opened at round 1, turn 1
    Started {
        tournament_id: TournamentId,
        captains: usize,
    },
    /// A captain claimed a participant
    Nominated {
        tournament_id: TournamentId,
        captain_id: ParticipantId,
        participant_id: ParticipantId,
        round: i32,
        turn: i32,
    },
    /// Final participant claimed
    Completed { tournament_id: TournamentId },
    /// All nominations removed
    Reset {
        tournament_id: TournamentId,
        removed: u64,
    },
}

impl DraftEvent {
    /// Returns the tournament_id for this event
    pub fn tournament_id(&self) -> &TournamentId {
        match self {
            DraftEvent::Started { tournament_id, .. } => tournament_id,
            DraftEvent::Nominated { tournament_id, .. } => tournament_id,
            DraftEvent::Completed { tournament_id } => tournament_id,
            DraftEvent::Reset { tournament_id, .. } => tournament_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DraftEvent::Started { .. } => "draft.started",
            DraftEvent::Nominated { .. } => "draft.nominated",
            DraftEvent::Completed { .. } => "draft.completed",
            DraftEvent::Reset { .. } => "draft.reset",
        }
    }
}
