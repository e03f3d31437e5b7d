use std::collections::HashSet;
use std::sync::Arc;

use super::require_tournament;
use crate::application::errors::{AppError, ErrorCode};
use crate::application::locks::TournamentLocks;
use crate::domain::draft::{Draft, DraftBoard, DraftError, DraftEvent, DraftStatus};
use crate::domain::participant::Participant;
use crate::domain::repositories::{
    ConflictKind, DraftRepository, DraftUnitOfWork, ParticipantRepository, RepositoryError,
    TournamentParticipantRepository, TournamentRepository,
};
use crate::domain::shared::{ParticipantId, TeamId, TournamentId};
use crate::domain::tournament::{Tournament, TournamentParticipant};

/// Ports shared by the draft use cases
///
/// Reads go through the repositories; every write goes through
/// `unit_of_work` so an operation never leaves half of its changes behind.
#[derive(Clone)]
pub struct DraftPorts {
    pub tournaments: Arc<dyn TournamentRepository>,
    pub participants: Arc<dyn ParticipantRepository>,
    pub members: Arc<dyn TournamentParticipantRepository>,
    pub drafts: Arc<dyn DraftRepository>,
    pub unit_of_work: Arc<dyn DraftUnitOfWork>,
    pub locks: TournamentLocks,
}

impl DraftPorts {
    async fn load(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<(Tournament, Vec<TournamentParticipant>, Vec<Draft>), AppError> {
        let tournament = require_tournament(self.tournaments.as_ref(), tournament_id).await?;
        let members = self.members.find_by_tournament(tournament_id).await?;
        let drafts = self.drafts.find_by_tournament(tournament_id).await?;
        Ok((tournament, members, drafts))
    }

    /// The participant as they will be stored once placed on `team_id`
    ///
    /// Someone still on a team of another tournament is rejected; that
    /// tournament's reset releases them.
    async fn placed_on_team(
        &self,
        participant_id: &ParticipantId,
        team_id: TeamId,
        own_teams: &HashSet<TeamId>,
    ) -> Result<Participant, AppError> {
        let participant = self.participants.find_by_id(participant_id).await?.ok_or_else(|| {
            AppError::business(
                ErrorCode::ParticipantNotFound,
                format!("Participant not found: {}", participant_id),
            )
        })?;
        if participant.team_id().is_some_and(|t| !own_teams.contains(t)) {
            return Err(DraftError::OnAnotherTeam(participant_id.clone()).into());
        }
        Ok(participant.assign_team(team_id))
    }
}

fn teams_of(members: &[TournamentParticipant]) -> HashSet<TeamId> {
    members.iter().filter_map(|m| m.team_id()).collect()
}

fn publish(events: &[DraftEvent]) {
    for event in events {
        tracing::info!(
            kind = event.name(),
            tournament_id = %event.tournament_id(),
            detail = ?event,
            "draft event"
        );
    }
}

/// Snapshot of a tournament's draft
#[derive(Debug, Clone, PartialEq)]
pub struct DraftState {
    pub tournament_id: TournamentId,
    pub status: DraftStatus,
    /// Round of the next pick, while the draft is active
    pub round: Option<i32>,
    /// Turn of the next pick, while the draft is active
    pub turn: Option<i32>,
    /// Captain on the clock, while the draft is active
    pub captain_id: Option<ParticipantId>,
    pub picks_made: usize,
    /// Participants still available, in registration order
    pub remaining: Vec<ParticipantId>,
}

impl DraftState {
    fn from_board(board: &DraftBoard<'_>, tournament_id: &TournamentId) -> Self {
        let next = board.next_pick();
        Self {
            tournament_id: tournament_id.clone(),
            status: board.status(),
            round: next.as_ref().map(|s| s.round),
            turn: next.as_ref().map(|s| s.turn),
            captain_id: next.map(|s| s.captain_id),
            picks_made: board.picks_made(),
            remaining: board
                .remaining()
                .into_iter()
                .map(|m| m.participant_id().clone())
                .collect(),
        }
    }
}

/// Opens a tournament's draft at round 1, turn 1
pub struct StartDraftUseCase {
    ports: DraftPorts,
}

impl StartDraftUseCase {
    pub fn new(ports: DraftPorts) -> Self {
        Self { ports }
    }

    /// # Business Rules
    /// - Draft must be Pending
    /// - Needs at least one captain and one participant to draft
    /// - Each captain is placed on their own team
    /// - No captain may still be on a team of another tournament
    pub async fn execute(&self, tournament_id: &TournamentId) -> Result<DraftState, AppError> {
        let _guard = self.ports.locks.acquire(tournament_id).await;

        let (tournament, members, drafts) = self.ports.load(tournament_id).await?;
        DraftBoard::new(&tournament, &members, &drafts).ensure_can_start()?;

        let teams = teams_of(&members);
        let mut captains = Vec::new();
        for captain in members.iter().filter(|m| m.is_captain()) {
            if let Some(team_id) = captain.team_id() {
                captains.push(
                    self.ports
                        .placed_on_team(captain.participant_id(), team_id, &teams)
                        .await?,
                );
            }
        }

        let started = self
            .ports
            .unit_of_work
            .start(&tournament.start_draft()?, &captains)
            .await?;

        let board = DraftBoard::new(&started, &members, &drafts);
        publish(&[DraftEvent::Started {
            tournament_id: tournament_id.clone(),
            captains: board.order().captains().len(),
        }]);

        Ok(DraftState::from_board(&board, tournament_id))
    }
}

#[derive(Debug, Clone)]
pub struct NominateParticipantCommand {
    pub tournament_id: TournamentId,
    pub captain_id: ParticipantId,
    pub participant_id: ParticipantId,
}

/// A captain claims a participant for their team
///
/// The whole check-and-insert runs under the tournament's lock, and the
/// store rejects a second nomination for the same `(round, turn)` or the
/// same participant. A writer that loses such a race gets `TURN_CONFLICT`
/// or `PARTICIPANT_ALREADY_CLAIMED`.
pub struct NominateParticipantUseCase {
    ports: DraftPorts,
}

impl NominateParticipantUseCase {
    pub fn new(ports: DraftPorts) -> Self {
        Self { ports }
    }

    pub async fn execute(&self, command: NominateParticipantCommand) -> Result<Draft, AppError> {
        let _guard = self.ports.locks.acquire(&command.tournament_id).await;

        let (tournament, members, drafts) = self.ports.load(&command.tournament_id).await?;
        let nomination = DraftBoard::new(&tournament, &members, &drafts)
            .nominate(&command.captain_id, &command.participant_id)?;

        let team_id = members
            .iter()
            .find(|m| m.participant_id() == &command.captain_id)
            .and_then(|m| m.team_id())
            .ok_or_else(|| {
                AppError::Unexpected(format!("captain {} has no team", command.captain_id))
            })?;
        let nominee = self
            .ports
            .placed_on_team(&command.participant_id, team_id, &teams_of(&members))
            .await?;
        let finished = if nomination.completes_draft {
            Some(tournament.finish_draft()?)
        } else {
            None
        };

        let saved = self
            .ports
            .unit_of_work
            .nominate(&nomination.draft, &nominee, finished.as_ref())
            .await
            .map_err(|e| lost_race(e, &nomination.draft))?;

        publish(&nomination.events);
        Ok(saved)
    }
}

fn lost_race(e: RepositoryError, draft: &Draft) -> AppError {
    match e {
        RepositoryError::Conflict {
            kind: ConflictKind::DraftTurn,
            message,
        } => {
            tracing::warn!(tournament_id = %draft.tournament_id(), %message, "turn already taken");
            AppError::business(
                ErrorCode::TurnConflict,
                format!("Round {} turn {} was already taken", draft.round(), draft.turn()),
            )
        }
        RepositoryError::Conflict {
            kind: ConflictKind::DraftedParticipant,
            message,
        } => {
            tracing::warn!(tournament_id = %draft.tournament_id(), %message, "already drafted");
            DraftError::AlreadyClaimed(draft.participant_id().clone()).into()
        }
        other => other.into(),
    }
}

/// Result of clearing a draft
#[derive(Debug, Clone, PartialEq)]
pub struct ResetDraftOutcome {
    pub tournament_id: TournamentId,
    pub removed: u64,
}

/// Clears every nomination and returns the draft to Pending
pub struct ResetDraftUseCase {
    ports: DraftPorts,
}

impl ResetDraftUseCase {
    pub fn new(ports: DraftPorts) -> Self {
        Self { ports }
    }

    pub async fn execute(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<ResetDraftOutcome, AppError> {
        let _guard = self.ports.locks.acquire(tournament_id).await;

        let tournament = require_tournament(self.ports.tournaments.as_ref(), tournament_id).await?;

        // Release everyone who was placed on one of this tournament's teams
        let members = self.ports.members.find_by_tournament(tournament_id).await?;
        let teams = teams_of(&members);
        let member_ids: Vec<ParticipantId> =
            members.iter().map(|m| m.participant_id().clone()).collect();
        let released: Vec<Participant> = self
            .ports
            .participants
            .find_by_ids(&member_ids)
            .await?
            .into_iter()
            .filter(|p| p.team_id().is_some_and(|t| teams.contains(t)))
            .map(Participant::leave_team)
            .collect();

        let removed = self
            .ports
            .unit_of_work
            .reset(&tournament.reset_draft(), &released)
            .await?;

        publish(&[DraftEvent::Reset {
            tournament_id: tournament_id.clone(),
            removed,
        }]);

        Ok(ResetDraftOutcome {
            tournament_id: tournament_id.clone(),
            removed,
        })
    }
}

/// Nominations of a tournament ordered by `(round, turn)`
pub struct GetDraftsUseCase {
    ports: DraftPorts,
}

impl GetDraftsUseCase {
    pub fn new(ports: DraftPorts) -> Self {
        Self { ports }
    }

    pub async fn execute(&self, tournament_id: &TournamentId) -> Result<Vec<Draft>, AppError> {
        require_tournament(self.ports.tournaments.as_ref(), tournament_id).await?;
        Ok(self.ports.drafts.find_by_tournament(tournament_id).await?)
    }
}

pub struct GetDraftStateUseCase {
    ports: DraftPorts,
}

impl GetDraftStateUseCase {
    pub fn new(ports: DraftPorts) -> Self {
        Self { ports }
    }

    pub async fn execute(&self, tournament_id: &TournamentId) -> Result<DraftState, AppError> {
        let (tournament, members, drafts) = self.ports.load(tournament_id).await?;
        let board = DraftBoard::new(&tournament, &members, &drafts);
        Ok(DraftState::from_board(&board, tournament_id))
    }
}
