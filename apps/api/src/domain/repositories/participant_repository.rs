use async_trait::async_trait;

use super::errors::RepositoryError;
use crate::domain::participant::Participant;
use crate::domain::shared::ParticipantId;

/// Repository trait for Participant entities
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Save a participant (insert or update)
    async fn save(&self, participant: &Participant) -> Result<Participant, RepositoryError>;

    /// All participants, oldest first
    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError>;

    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, RepositoryError>;

    /// Participants matching any of `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[ParticipantId]) -> Result<Vec<Participant>, RepositoryError>;
}
