use async_trait::async_trait;

use super::errors::RepositoryError;
use crate::domain::draft::Draft;
use crate::domain::participant::Participant;
use crate::domain::tournament::Tournament;

/// Writes of one draft operation, committed together or not at all
///
/// Each method either persists every change it is given or leaves the store
/// as it was before the call.
#[async_trait]
pub trait DraftUnitOfWork: Send + Sync {
    /// Save the started tournament and every captain placed on their team
    async fn start(
        &self,
        tournament: &Tournament,
        captains: &[Participant],
    ) -> Result<Tournament, RepositoryError>;

    /// Insert a nomination and save the nominee on the captain's team
    ///
    /// `finished` is the tournament to save when this pick completes the
    /// draft. An insert conflict is returned unchanged.
    async fn nominate(
        &self,
        draft: &Draft,
        nominee: &Participant,
        finished: Option<&Tournament>,
    ) -> Result<Draft, RepositoryError>;

    /// Delete the tournament's nominations, save the released participants
    /// and the reset tournament; returns how many nominations were removed
    async fn reset(
        &self,
        tournament: &Tournament,
        released: &[Participant],
    ) -> Result<u64, RepositoryError>;
}
