use chrono::{DateTime, Utc};

use super::value_objects::DraftStatus;
use crate::domain::errors::ValidationError;
use crate::domain::shared::{DraftId, ParticipantId, TournamentId};

/// One nomination event: a captain claiming a participant
///
/// `(round, turn)` orders nominations within a tournament.
///
/// # Invariants
/// - `round` and `turn` are positive
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    id: DraftId,
    tournament_id: TournamentId,
    captain_id: ParticipantId,
    participant_id: ParticipantId,
    round: i32,
    turn: i32,
    status: DraftStatus,
    created_at: DateTime<Utc>,
}

impl Draft {
    /// Records a new nomination
    ///
    /// # Returns
    /// * `Err(ValidationError::InvalidPosition)` - If round or turn is below 1
    pub fn create(
        tournament_id: TournamentId,
        captain_id: ParticipantId,
        participant_id: ParticipantId,
        round: i32,
        turn: i32,
        status: DraftStatus,
    ) -> Result<Self, ValidationError> {
        if round < 1 {
            return Err(ValidationError::InvalidPosition {
                field: "round",
                value: round,
            });
        }
        if turn < 1 {
            return Err(ValidationError::InvalidPosition {
                field: "turn",
                value: turn,
            });
        }

        Ok(Self {
            id: DraftId::create(),
            tournament_id,
            captain_id,
            participant_id,
            round,
            turn,
            status,
            created_at: Utc::now(),
        })
    }

    /// Reconstructs a Draft from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: DraftId,
        tournament_id: TournamentId,
        captain_id: ParticipantId,
        participant_id: ParticipantId,
        round: i32,
        turn: i32,
        status: DraftStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tournament_id,
            captain_id,
            participant_id,
            round,
            turn,
            status,
            created_at,
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> &DraftId {
        &self.id
    }

    pub fn tournament_id(&self) -> &TournamentId {
        &self.tournament_id
    }

    /// Participant id of the captain who made the pick
    pub fn captain_id(&self) -> &ParticipantId {
        &self.captain_id
    }

    /// Participant id of the player who was picked
    pub fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    pub fn round(&self) -> i32 {
        self.round
    }

    pub fn turn(&self) -> i32 {
        self.turn
    }

    pub fn status(&self) -> DraftStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (TournamentId, ParticipantId, ParticipantId) {
        (
            TournamentId::create(),
            ParticipantId::create(),
            ParticipantId::create(),
        )
    }

    #[test]
    fn create_stamps_current_time_and_status() {
        let (t, c, p) = ids();
        let before = Utc::now();

        let draft =
            Draft::create(t.clone(), c.clone(), p.clone(), 1, 1, DraftStatus::Active).unwrap();

        assert!(draft.created_at() >= before);
        assert!(draft.created_at() <= Utc::now());
        assert_eq!(draft.status(), DraftStatus::Active);
        assert_eq!(draft.tournament_id(), &t);
        assert_eq!(draft.captain_id(), &c);
        assert_eq!(draft.participant_id(), &p);
        assert_eq!((draft.round(), draft.turn()), (1, 1));
    }

    #[test]
    fn create_rejects_non_positive_round() {
        let (t, c, p) = ids();
        assert_eq!(
            Draft::create(t, c, p, 0, 1, DraftStatus::Active).unwrap_err(),
            ValidationError::InvalidPosition {
                field: "round",
                value: 0
            }
        );
    }

    #[test]
    fn create_rejects_non_positive_turn() {
        let (t, c, p) = ids();
        assert!(matches!(
            Draft::create(t, c, p, 2, -3, DraftStatus::Active),
            Err(ValidationError::InvalidPosition { field: "turn", .. })
        ));
    }

    #[test]
    fn reconstruct_returns_every_field_exactly() {
        let id = DraftId::reconstruct("d-1").unwrap();
        let (t, c, p) = ids();
        let created_at = Utc::now() - chrono::Duration::minutes(42);

        let draft = Draft::reconstruct(
            id.clone(),
            t.clone(),
            c.clone(),
            p.clone(),
            3,
            2,
            DraftStatus::Done,
            created_at,
        );

        assert_eq!(draft.id(), &id);
        assert_eq!(draft.tournament_id(), &t);
        assert_eq!(draft.captain_id(), &c);
        assert_eq!(draft.participant_id(), &p);
        assert_eq!(draft.round(), 3);
        assert_eq!(draft.turn(), 2);
        assert_eq!(draft.status(), DraftStatus::Done);
        assert_eq!(draft.created_at(), created_at);
    }
}
