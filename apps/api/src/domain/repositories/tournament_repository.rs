use async_trait::async_trait;

use super::errors::RepositoryError;
use crate::domain::shared::TournamentId;
use crate::domain::tournament::Tournament;

/// Repository trait for Tournament aggregate
///
/// Defines the contract for persisting and retrieving tournaments.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Save a tournament (insert or update), returning the persisted form
    async fn save(&self, tournament: &Tournament) -> Result<Tournament, RepositoryError>;

    /// All tournaments, oldest first
    async fn find_all(&self) -> Result<Vec<Tournament>, RepositoryError>;

    /// Find a tournament by its ID
    async fn find_by_id(&self, id: &TournamentId) -> Result<Option<Tournament>, RepositoryError>;
}
