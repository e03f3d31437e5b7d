use async_trait::async_trait;

use super::errors::RepositoryError;
use crate::domain::draft::Draft;
use crate::domain::shared::{DraftId, TournamentId};

/// Repository trait for nomination records
#[async_trait]
pub trait DraftRepository: Send + Sync {
    /// Insert a nomination
    ///
    /// Fails with [`RepositoryError::Conflict`] if the tournament already has
    /// a nomination at the same `(round, turn)` (kind `DraftTurn`) or for the
    /// same participant (kind `DraftedParticipant`).
    async fn insert(&self, draft: &Draft) -> Result<Draft, RepositoryError>;

    /// Nominations of a tournament ordered by `(round, turn)`
    async fn find_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<Draft>, RepositoryError>;

    /// Remove one nomination; returns false if it did not exist
    async fn delete(&self, id: &DraftId) -> Result<bool, RepositoryError>;

    /// Remove every nomination of a tournament, returning how many were removed
    async fn delete_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<u64, RepositoryError>;
}
