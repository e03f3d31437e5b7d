use async_trait::async_trait;
use sqlx::PgPool;

use super::db_error;
use super::postgres_draft_repository::{delete_drafts, insert_draft};
use super::postgres_participant_repository::upsert_participant;
use super::postgres_tournament_repository::upsert_tournament;
use crate::domain::draft::Draft;
use crate::domain::participant::Participant;
use crate::domain::repositories::{DraftUnitOfWork, RepositoryError};
use crate::domain::tournament::Tournament;

/// PostgreSQL implementation of DraftUnitOfWork
///
/// Every operation runs in one transaction. An error drops the transaction
/// before `commit`, which rolls all of its statements back.
pub struct PostgresDraftUnitOfWork {
    pool: PgPool,
}

impl PostgresDraftUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DraftUnitOfWork for PostgresDraftUnitOfWork {
    async fn start(
        &self,
        tournament: &Tournament,
        captains: &[Participant],
    ) -> Result<Tournament, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let started = upsert_tournament(&mut tx, tournament).await?;
        for captain in captains {
            upsert_participant(&mut tx, captain).await?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit draft start"))?;
        Ok(started)
    }

    async fn nominate(
        &self,
        draft: &Draft,
        nominee: &Participant,
        finished: Option<&Tournament>,
    ) -> Result<Draft, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let saved = insert_draft(&mut tx, draft).await?;
        if let Some(tournament) = finished {
            upsert_tournament(&mut tx, tournament).await?;
        }
        upsert_participant(&mut tx, nominee).await?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit nomination"))?;
        Ok(saved)
    }

    async fn reset(
        &self,
        tournament: &Tournament,
        released: &[Participant],
    ) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let removed = delete_drafts(&mut tx, tournament.id()).await?;
        for participant in released {
            upsert_participant(&mut tx, participant).await?;
        }
        upsert_tournament(&mut tx, tournament).await?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit draft reset"))?;
        Ok(removed)
    }
}
