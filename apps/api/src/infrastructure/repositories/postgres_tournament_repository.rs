use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use super::db_error;
use crate::domain::draft::DraftStatus;
use crate::domain::errors::ValidationError;
use crate::domain::repositories::{RepositoryError, TournamentRepository};
use crate::domain::shared::TournamentId;
use crate::domain::tournament::{Tournament, TournamentName};

/// PostgreSQL implementation of TournamentRepository
pub struct PostgresTournamentRepository {
    pool: PgPool,
}

impl PostgresTournamentRepository {
    /// Creates a new PostgresTournamentRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TournamentRow {
    id: String,
    name: String,
    draft_status: DraftStatus,
    created_at: DateTime<Utc>,
}

impl TryFrom<TournamentRow> for Tournament {
    type Error = ValidationError;

    fn try_from(r: TournamentRow) -> Result<Self, Self::Error> {
        Ok(Tournament::reconstruct(
            TournamentId::reconstruct(r.id)?,
            TournamentName::reconstruct(&r.name)?,
            r.draft_status,
            r.created_at,
        ))
    }
}

pub(super) async fn upsert_tournament(
    conn: &mut PgConnection,
    tournament: &Tournament,
) -> Result<Tournament, RepositoryError> {
    let row = sqlx::query_as::<_, TournamentRow>(
        r#"
        INSERT INTO tournaments (id, name, draft_status, created_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            draft_status = EXCLUDED.draft_status
        RETURNING id, name, draft_status, created_at
        "#,
    )
    .bind(tournament.id().value())
    .bind(tournament.name().as_str())
    .bind(tournament.draft_status())
    .bind(tournament.created_at())
    .fetch_one(&mut *conn)
    .await
    .map_err(db_error("Failed to save tournament"))?;

    Ok(Tournament::try_from(row)?)
}

#[async_trait]
impl TournamentRepository for PostgresTournamentRepository {
    async fn save(&self, tournament: &Tournament) -> Result<Tournament, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(db_error("Failed to acquire connection"))?;
        upsert_tournament(&mut conn, tournament).await
    }

    async fn find_all(&self) -> Result<Vec<Tournament>, RepositoryError> {
        let rows = sqlx::query_as::<_, TournamentRow>(
            r#"
            SELECT id, name, draft_status, created_at
            FROM tournaments
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list tournaments"))?;

        rows.into_iter()
            .map(|r| Tournament::try_from(r).map_err(RepositoryError::from))
            .collect()
    }

    async fn find_by_id(&self, id: &TournamentId) -> Result<Option<Tournament>, RepositoryError> {
        let row = sqlx::query_as::<_, TournamentRow>(
            r#"
            SELECT id, name, draft_status, created_at
            FROM tournaments
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find tournament by id"))?;

        Ok(row.map(Tournament::try_from).transpose()?)
    }
}
