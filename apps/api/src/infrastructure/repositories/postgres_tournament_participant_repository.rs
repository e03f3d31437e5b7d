use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::db_error;
use crate::domain::errors::ValidationError;
use crate::domain::repositories::{RepositoryError, TournamentParticipantRepository};
use crate::domain::shared::{ParticipantId, TournamentId, TournamentParticipantId};
use crate::domain::tournament::TournamentParticipant;

/// PostgreSQL implementation of TournamentParticipantRepository
pub struct PostgresTournamentParticipantRepository {
    pool: PgPool,
}

impl PostgresTournamentParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: String,
    tournament_id: String,
    participant_id: String,
    is_captain: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<MemberRow> for TournamentParticipant {
    type Error = ValidationError;

    fn try_from(r: MemberRow) -> Result<Self, Self::Error> {
        Ok(TournamentParticipant::reconstruct(
            TournamentParticipantId::reconstruct(r.id)?,
            TournamentId::reconstruct(r.tournament_id)?,
            ParticipantId::reconstruct(r.participant_id)?,
            r.is_captain,
            r.created_at,
        ))
    }
}

#[async_trait]
impl TournamentParticipantRepository for PostgresTournamentParticipantRepository {
    async fn save(
        &self,
        member: &TournamentParticipant,
    ) -> Result<TournamentParticipant, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            INSERT INTO tournament_participants (
                id, tournament_id, participant_id, is_captain, created_at
            )
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                is_captain = EXCLUDED.is_captain
            RETURNING id, tournament_id, participant_id, is_captain, created_at
            "#,
        )
        .bind(member.id().value())
        .bind(member.tournament_id().value())
        .bind(member.participant_id().value())
        .bind(member.is_captain())
        .bind(member.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to save tournament participant"))?;

        Ok(TournamentParticipant::try_from(row)?)
    }

    async fn find_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<TournamentParticipant>, RepositoryError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, tournament_id, participant_id, is_captain, created_at
            FROM tournament_participants
            WHERE tournament_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(tournament_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to find tournament participants"))?;

        rows.into_iter()
            .map(|r| TournamentParticipant::try_from(r).map_err(RepositoryError::from))
            .collect()
    }

    async fn find_by_tournament_and_participant(
        &self,
        tournament_id: &TournamentId,
        participant_id: &ParticipantId,
    ) -> Result<Option<TournamentParticipant>, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, tournament_id, participant_id, is_captain, created_at
            FROM tournament_participants
            WHERE tournament_id = $1 AND participant_id = $2
            "#,
        )
        .bind(tournament_id.value())
        .bind(participant_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find tournament participant"))?;

        Ok(row.map(TournamentParticipant::try_from).transpose()?)
    }
}
