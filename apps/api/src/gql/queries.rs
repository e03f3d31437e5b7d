use async_graphql::{Context, Object, Result, ID};

use super::error::GqlResultExt;
use super::types::{Draft, DraftState, Participant, Tournament, TournamentParticipant};
use crate::domain::shared::{ParticipantId, TournamentId};
use crate::state::AppState;

#[derive(Default)]
pub struct TournamentQuery;

#[Object]
impl TournamentQuery {
    /// All tournaments, oldest first
    async fn tournaments(&self, ctx: &Context<'_>) -> Result<Vec<Tournament>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.use_cases().get_tournaments.execute().await.gql()?;
        Ok(rows.into_iter().map(Tournament::from).collect())
    }

    /// Get a single tournament by ID
    async fn tournament(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Tournament>> {
        let state = ctx.data::<AppState>()?;
        let id = TournamentId::reconstruct(id.to_string()).gql()?;
        let row = state.use_cases().get_tournament.execute(&id).await.gql()?;
        Ok(row.map(Tournament::from))
    }

    /// Members of a tournament in registration order
    async fn tournament_participants(
        &self,
        ctx: &Context<'_>,
        tournament_id: ID,
    ) -> Result<Vec<TournamentParticipant>> {
        let state = ctx.data::<AppState>()?;
        let id = TournamentId::reconstruct(tournament_id.to_string()).gql()?;
        let rows = state
            .use_cases()
            .get_tournament_participants
            .execute(&id)
            .await
            .gql()?;
        Ok(rows.into_iter().map(TournamentParticipant::from).collect())
    }
}

#[derive(Default)]
pub struct ParticipantQuery;

#[Object]
impl ParticipantQuery {
    async fn participants(&self, ctx: &Context<'_>) -> Result<Vec<Participant>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.use_cases().get_participants.execute().await.gql()?;
        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn participant(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Participant>> {
        let state = ctx.data::<AppState>()?;
        let id = ParticipantId::reconstruct(id.to_string()).gql()?;
        let row = state.use_cases().get_participant.execute(&id).await.gql()?;
        Ok(row.map(Participant::from))
    }
}

#[derive(Default)]
pub struct DraftQuery;

#[Object]
impl DraftQuery {
    /// Picks made so far, ordered by round then turn
    async fn drafts(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<Vec<Draft>> {
        let state = ctx.data::<AppState>()?;
        let id = TournamentId::reconstruct(tournament_id.to_string()).gql()?;
        let rows = state.use_cases().get_drafts.execute(&id).await.gql()?;
        Ok(rows.into_iter().map(Draft::from).collect())
    }

    async fn draft_state(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<DraftState> {
        let state = ctx.data::<AppState>()?;
        let id = TournamentId::reconstruct(tournament_id.to_string()).gql()?;
        let snapshot = state.use_cases().get_draft_state.execute(&id).await.gql()?;
        Ok(snapshot.into())
    }
}
