use async_graphql::{Context, Object, Result};

use super::error::GqlResultExt;
use super::types::{
    CreateParticipantInput, CreateTournamentInput, Draft, DraftState, MembershipInput,
    NominateParticipantInput, Participant, ResetDraftResult, Tournament, TournamentDraftInput,
    TournamentParticipant,
};
use crate::application::use_cases::{
    CreateParticipantCommand, MembershipCommand, NominateParticipantCommand,
};
use crate::domain::shared::{ParticipantId, TournamentId};
use crate::state::AppState;

fn membership_command(input: MembershipInput) -> Result<MembershipCommand> {
    Ok(MembershipCommand {
        tournament_id: TournamentId::reconstruct(input.tournament_id.to_string()).gql()?,
        participant_id: ParticipantId::reconstruct(input.participant_id.to_string()).gql()?,
        is_captain: input.is_captain,
    })
}

#[derive(Default)]
pub struct TournamentMutation;

#[Object]
impl TournamentMutation {
    async fn create_tournament(
        &self,
        ctx: &Context<'_>,
        input: CreateTournamentInput,
    ) -> Result<Tournament> {
        let state = ctx.data::<AppState>()?;
        let tournament = state
            .use_cases()
            .create_tournament
            .execute(&input.name)
            .await
            .gql()?;
        Ok(tournament.into())
    }

    /// Adds an existing participant to a tournament; rejected once the draft has started
    async fn add_participant_to_tournament(
        &self,
        ctx: &Context<'_>,
        input: MembershipInput,
    ) -> Result<TournamentParticipant> {
        let state = ctx.data::<AppState>()?;
        let member = state
            .use_cases()
            .add_participant
            .execute(membership_command(input)?)
            .await
            .gql()?;
        Ok(member.into())
    }

    async fn set_captain(
        &self,
        ctx: &Context<'_>,
        input: MembershipInput,
    ) -> Result<TournamentParticipant> {
        let state = ctx.data::<AppState>()?;
        let member = state
            .use_cases()
            .set_captain
            .execute(membership_command(input)?)
            .await
            .gql()?;
        Ok(member.into())
    }
}

#[derive(Default)]
pub struct ParticipantMutation;

#[Object]
impl ParticipantMutation {
    async fn create_participant(
        &self,
        ctx: &Context<'_>,
        input: CreateParticipantInput,
    ) -> Result<Participant> {
        let state = ctx.data::<AppState>()?;
        let participant = state
            .use_cases()
            .create_participant
            .execute(CreateParticipantCommand {
                name: input.name,
                weapon: input.weapon,
                xp: input.xp,
            })
            .await
            .gql()?;
        Ok(participant.into())
    }
}

#[derive(Default)]
pub struct DraftMutation;

#[Object]
impl DraftMutation {
    async fn start_draft(
        &self,
        ctx: &Context<'_>,
        input: TournamentDraftInput,
    ) -> Result<DraftState> {
        let state = ctx.data::<AppState>()?;
        let id = TournamentId::reconstruct(input.tournament_id.to_string()).gql()?;
        let snapshot = state.use_cases().start_draft.execute(&id).await.gql()?;
        Ok(snapshot.into())
    }

    /// The captain on the clock claims a participant for their team
    async fn nominate_participant(
        &self,
        ctx: &Context<'_>,
        input: NominateParticipantInput,
    ) -> Result<Draft> {
        let state = ctx.data::<AppState>()?;
        let command = NominateParticipantCommand {
            tournament_id: TournamentId::reconstruct(input.tournament_id.to_string()).gql()?,
            captain_id: ParticipantId::reconstruct(input.captain_id.to_string()).gql()?,
            participant_id: ParticipantId::reconstruct(input.participant_id.to_string()).gql()?,
        };
        let draft = state.use_cases().nominate.execute(command).await.gql()?;
        Ok(draft.into())
    }

    async fn reset_draft(
        &self,
        ctx: &Context<'_>,
        input: TournamentDraftInput,
    ) -> Result<ResetDraftResult> {
        let state = ctx.data::<AppState>()?;
        let id = TournamentId::reconstruct(input.tournament_id.to_string()).gql()?;
        let outcome = state.use_cases().reset_draft.execute(&id).await.gql()?;
        Ok(outcome.into())
    }
}
