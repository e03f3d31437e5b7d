//! Draft unit of work for stores without transactions
//!
//! Each step goes through the repository ports and records how to undo it.
//! When a later step fails, the recorded steps are undone newest first and
//! the original error is returned. The memory backend runs on this.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::draft::Draft;
use crate::domain::participant::Participant;
use crate::domain::repositories::{
    DraftRepository, DraftUnitOfWork, ParticipantRepository, RepositoryError,
    TournamentRepository,
};
use crate::domain::shared::DraftId;
use crate::domain::tournament::Tournament;

enum Undo {
    /// Put back the previous value of a tournament
    Tournament(Tournament),
    /// Put back the previous value of a participant
    Participant(Participant),
    /// Remove a nomination that was inserted
    Inserted(DraftId),
    /// Insert again nominations that were deleted
    Deleted(Vec<Draft>),
}

pub struct CompensatingDraftUnitOfWork {
    tournaments: Arc<dyn TournamentRepository>,
    participants: Arc<dyn ParticipantRepository>,
    drafts: Arc<dyn DraftRepository>,
}

impl CompensatingDraftUnitOfWork {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        participants: Arc<dyn ParticipantRepository>,
        drafts: Arc<dyn DraftRepository>,
    ) -> Self {
        Self {
            tournaments,
            participants,
            drafts,
        }
    }

    async fn save_tournament(
        &self,
        tournament: &Tournament,
        log: &mut Vec<Undo>,
    ) -> Result<Tournament, RepositoryError> {
        let previous = self.tournaments.find_by_id(tournament.id()).await?;
        let saved = self.tournaments.save(tournament).await?;
        if let Some(previous) = previous {
            log.push(Undo::Tournament(previous));
        }
        Ok(saved)
    }

    async fn save_participants(
        &self,
        participants: &[Participant],
        log: &mut Vec<Undo>,
    ) -> Result<(), RepositoryError> {
        for participant in participants {
            let previous = self.participants.find_by_id(participant.id()).await?;
            self.participants.save(participant).await?;
            if let Some(previous) = previous {
                log.push(Undo::Participant(previous));
            }
        }
        Ok(())
    }

    /// Undo `log` if `result` failed, then hand `result` back
    async fn settle<T>(
        &self,
        result: Result<T, RepositoryError>,
        log: Vec<Undo>,
    ) -> Result<T, RepositoryError> {
        if let Err(e) = &result {
            tracing::warn!(error = %e, steps = log.len(), "rolling back draft writes");
            for step in log.into_iter().rev() {
                if let Err(undo) = self.undo(step).await {
                    tracing::error!(error = %undo, "failed to undo draft write");
                }
            }
        }
        result
    }

    async fn undo(&self, step: Undo) -> Result<(), RepositoryError> {
        match step {
            Undo::Tournament(previous) => {
                self.tournaments.save(&previous).await?;
            }
            Undo::Participant(previous) => {
                self.participants.save(&previous).await?;
            }
            Undo::Inserted(id) => {
                self.drafts.delete(&id).await?;
            }
            Undo::Deleted(drafts) => {
                for draft in &drafts {
                    self.drafts.insert(draft).await?;
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DraftUnitOfWork for CompensatingDraftUnitOfWork {
    async fn start(
        &self,
        tournament: &Tournament,
        captains: &[Participant],
    ) -> Result<Tournament, RepositoryError> {
        let mut log = Vec::new();
        let result = async {
            let started = self.save_tournament(tournament, &mut log).await?;
            self.save_participants(captains, &mut log).await?;
            Ok::<_, RepositoryError>(started)
        }
        .await;
        self.settle(result, log).await
    }

    async fn nominate(
        &self,
        draft: &Draft,
        nominee: &Participant,
        finished: Option<&Tournament>,
    ) -> Result<Draft, RepositoryError> {
        let mut log = Vec::new();
        let result = async {
            let saved = self.drafts.insert(draft).await?;
            log.push(Undo::Inserted(saved.id().clone()));
            if let Some(tournament) = finished {
                self.save_tournament(tournament, &mut log).await?;
            }
            self.save_participants(std::slice::from_ref(nominee), &mut log)
                .await?;
            Ok::<_, RepositoryError>(saved)
        }
        .await;
        self.settle(result, log).await
    }

    async fn reset(
        &self,
        tournament: &Tournament,
        released: &[Participant],
    ) -> Result<u64, RepositoryError> {
        let mut log = Vec::new();
        let result = async {
            let existing = self.drafts.find_by_tournament(tournament.id()).await?;
            let removed = self.drafts.delete_by_tournament(tournament.id()).await?;
            log.push(Undo::Deleted(existing));
            self.save_participants(released, &mut log).await?;
            self.save_tournament(tournament, &mut log).await?;
            Ok::<_, RepositoryError>(removed)
        }
        .await;
        self.settle(result, log).await
    }
}
