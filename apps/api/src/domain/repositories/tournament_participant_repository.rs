use async_trait::async_trait;

use super::errors::RepositoryError;
use crate::domain::shared::{ParticipantId, TournamentId};
use crate::domain::tournament::TournamentParticipant;

/// Repository trait for tournament membership
#[async_trait]
pub trait TournamentParticipantRepository: Send + Sync {
    /// Save a membership (insert or update by id)
    ///
    /// A second membership for the same `(tournament, participant)` pair
    /// fails with [`RepositoryError::Conflict`].
    async fn save(
        &self,
        member: &TournamentParticipant,
    ) -> Result<TournamentParticipant, RepositoryError>;

    /// Members of a tournament ordered by registration time, then id
    async fn find_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<TournamentParticipant>, RepositoryError>;

    async fn find_by_tournament_and_participant(
        &self,
        tournament_id: &TournamentId,
        participant_id: &ParticipantId,
    ) -> Result<Option<TournamentParticipant>, RepositoryError>;
}
