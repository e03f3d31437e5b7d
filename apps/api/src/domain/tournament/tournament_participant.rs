use chrono::{DateTime, Utc};

use crate::domain::shared::{ParticipantId, TeamId, TournamentId, TournamentParticipantId};

/// Membership of a participant in a tournament
///
/// Joins a [`Participant`](crate::domain::participant::Participant) to a
/// tournament and flags whether they captain a team there. Captaincy is
/// per tournament, so the captain's team is keyed by this membership.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentParticipant {
    id: TournamentParticipantId,
    tournament_id: TournamentId,
    participant_id: ParticipantId,
    is_captain: bool,
    created_at: DateTime<Utc>,
}

impl TournamentParticipant {
    /// Registers a participant in a tournament
    pub fn create(
        tournament_id: TournamentId,
        participant_id: ParticipantId,
        is_captain: bool,
    ) -> Self {
        Self {
            id: TournamentParticipantId::create(),
            tournament_id,
            participant_id,
            is_captain,
            created_at: Utc::now(),
        }
    }

    /// Reconstructs a membership from persistence layer data
    pub fn reconstruct(
        id: TournamentParticipantId,
        tournament_id: TournamentId,
        participant_id: ParticipantId,
        is_captain: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tournament_id,
            participant_id,
            is_captain,
            created_at,
        }
    }

    /// Returns a replacement membership with the captain flag changed
    ///
    /// Identity and registration time are kept, so the member keeps their
    /// place in the turn order.
    pub fn with_captain(self, is_captain: bool) -> Self {
        Self { is_captain, ..self }
    }

    /// The team this member leads, if they are a captain
    pub fn team_id(&self) -> Option<TeamId> {
        self.is_captain.then(|| self.id.retag())
    }

    pub fn id(&self) -> &TournamentParticipantId {
        &self.id
    }

    pub fn tournament_id(&self) -> &TournamentId {
        &self.tournament_id
    }

    pub fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    pub fn is_captain(&self) -> bool {
        self.is_captain
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
