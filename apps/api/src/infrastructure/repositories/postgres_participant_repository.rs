use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use super::db_error;
use crate::domain::errors::ValidationError;
use crate::domain::participant::Participant;
use crate::domain::repositories::{ParticipantRepository, RepositoryError};
use crate::domain::shared::{ParticipantId, TeamId};

/// PostgreSQL implementation of ParticipantRepository
pub struct PostgresParticipantRepository {
    pool: PgPool,
}

impl PostgresParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    id: String,
    name: String,
    weapon: String,
    xp: i32,
    team_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = ValidationError;

    fn try_from(r: ParticipantRow) -> Result<Self, Self::Error> {
        Ok(Participant::reconstruct(
            ParticipantId::reconstruct(r.id)?,
            r.name,
            r.weapon,
            r.xp,
            r.created_at,
            r.team_id.map(TeamId::reconstruct).transpose()?,
        ))
    }
}

fn into_participants(rows: Vec<ParticipantRow>) -> Result<Vec<Participant>, RepositoryError> {
    rows.into_iter()
        .map(|r| Participant::try_from(r).map_err(RepositoryError::from))
        .collect()
}

pub(super) async fn upsert_participant(
    conn: &mut PgConnection,
    participant: &Participant,
) -> Result<Participant, RepositoryError> {
    let row = sqlx::query_as::<_, ParticipantRow>(
        r#"
        INSERT INTO participants (id, name, weapon, xp, team_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            weapon = EXCLUDED.weapon,
            xp = EXCLUDED.xp,
            team_id = EXCLUDED.team_id
        RETURNING id, name, weapon, xp, team_id, created_at
        "#,
    )
    .bind(participant.id().value())
    .bind(participant.name())
    .bind(participant.weapon())
    .bind(participant.xp())
    .bind(participant.team_id().map(|t| t.value()))
    .bind(participant.created_at())
    .fetch_one(&mut *conn)
    .await
    .map_err(db_error("Failed to save participant"))?;

    Ok(Participant::try_from(row)?)
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepository {
    async fn save(&self, participant: &Participant) -> Result<Participant, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(db_error("Failed to acquire connection"))?;
        upsert_participant(&mut conn, participant).await
    }

    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT id, name, weapon, xp, team_id, created_at
            FROM participants
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list participants"))?;

        into_participants(rows)
    }

    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, RepositoryError> {
        let row = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT id, name, weapon, xp, team_id, created_at
            FROM participants
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find participant by id"))?;

        Ok(row.map(Participant::try_from).transpose()?)
    }

    async fn find_by_ids(
        &self,
        ids: &[ParticipantId],
    ) -> Result<Vec<Participant>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<String> = ids.iter().map(|id| id.value().to_string()).collect();
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT id, name, weapon, xp, team_id, created_at
            FROM participants
            WHERE id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to find participants by ids"))?;

        into_participants(rows)
    }
}
