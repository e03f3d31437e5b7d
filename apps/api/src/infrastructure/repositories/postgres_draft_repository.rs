use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use super::db_error;
use crate::domain::draft::{Draft, DraftStatus};
use crate::domain::errors::ValidationError;
use crate::domain::repositories::{DraftRepository, RepositoryError};
use crate::domain::shared::{DraftId, ParticipantId, TournamentId};

/// Unique constraint on `(tournament_id, round, turn)`
pub(crate) const TURN_CONSTRAINT: &str = "drafts_turn_key";

/// Unique constraint on `(tournament_id, participant_id)`
pub(crate) const PARTICIPANT_CONSTRAINT: &str = "drafts_participant_key";

/// PostgreSQL implementation of DraftRepository
///
/// The `drafts` table carries unique constraints on
/// `(tournament_id, round, turn)` and `(tournament_id, participant_id)`, so
/// two writers racing for the same turn cannot both succeed.
pub struct PostgresDraftRepository {
    pool: PgPool,
}

impl PostgresDraftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DraftRow {
    id: String,
    tournament_id: String,
    captain_id: String,
    participant_id: String,
    round: i32,
    turn: i32,
    status: DraftStatus,
    created_at: DateTime<Utc>,
}

impl TryFrom<DraftRow> for Draft {
    type Error = ValidationError;

    fn try_from(r: DraftRow) -> Result<Self, Self::Error> {
        Ok(Draft::reconstruct(
            DraftId::reconstruct(r.id)?,
            TournamentId::reconstruct(r.tournament_id)?,
            ParticipantId::reconstruct(r.captain_id)?,
            ParticipantId::reconstruct(r.participant_id)?,
            r.round,
            r.turn,
            r.status,
            r.created_at,
        ))
    }
}

pub(super) async fn insert_draft(
    conn: &mut PgConnection,
    draft: &Draft,
) -> Result<Draft, RepositoryError> {
    let row = sqlx::query_as::<_, DraftRow>(
        r#"
        INSERT INTO drafts (
            id, tournament_id, captain_id, participant_id,
            round, turn, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, tournament_id, captain_id, participant_id,
                  round, turn, status, created_at
        "#,
    )
    .bind(draft.id().value())
    .bind(draft.tournament_id().value())
    .bind(draft.captain_id().value())
    .bind(draft.participant_id().value())
    .bind(draft.round())
    .bind(draft.turn())
    .bind(draft.status())
    .bind(draft.created_at())
    .fetch_one(&mut *conn)
    .await
    .map_err(db_error("Failed to insert draft"))?;

    Ok(Draft::try_from(row)?)
}

pub(super) async fn delete_drafts(
    conn: &mut PgConnection,
    tournament_id: &TournamentId,
) -> Result<u64, RepositoryError> {
    let result = sqlx::query(
        r#"
        DELETE FROM drafts WHERE tournament_id = $1
        "#,
    )
    .bind(tournament_id.value())
    .execute(&mut *conn)
    .await
    .map_err(db_error("Failed to delete drafts"))?;

    Ok(result.rows_affected())
}

#[async_trait]
impl DraftRepository for PostgresDraftRepository {
    async fn insert(&self, draft: &Draft) -> Result<Draft, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(db_error("Failed to acquire connection"))?;
        insert_draft(&mut conn, draft).await
    }

    async fn find_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<Draft>, RepositoryError> {
        let rows = sqlx::query_as::<_, DraftRow>(
            r#"
            SELECT id, tournament_id, captain_id, participant_id,
                   round, turn, status, created_at
            FROM drafts
            WHERE tournament_id = $1
            ORDER BY round, turn
            "#,
        )
        .bind(tournament_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to find drafts by tournament"))?;

        rows.into_iter()
            .map(|r| Draft::try_from(r).map_err(RepositoryError::from))
            .collect()
    }

    async fn delete(&self, id: &DraftId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM drafts WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete draft"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(db_error("Failed to acquire connection"))?;
        delete_drafts(&mut conn, tournament_id).await
    }
}
