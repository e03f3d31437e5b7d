use std::sync::Arc;

use super::require_tournament;
use crate::application::errors::{AppError, ErrorCode};
use crate::application::locks::TournamentLocks;
use crate::domain::draft::{DraftError, DraftStatus};
use crate::domain::repositories::{
    ParticipantRepository, RepositoryError, TournamentParticipantRepository, TournamentRepository,
};
use crate::domain::shared::{ParticipantId, TournamentId};
use crate::domain::tournament::{Tournament, TournamentParticipant};

/// Input shared by the membership mutations
#[derive(Debug, Clone)]
pub struct MembershipCommand {
    pub tournament_id: TournamentId,
    pub participant_id: ParticipantId,
    pub is_captain: bool,
}

/// Roster changes are only allowed before the draft starts
fn ensure_roster_open(tournament: &Tournament) -> Result<(), AppError> {
    if tournament.draft_status() != DraftStatus::Pending {
        return Err(DraftError::InProgress.into());
    }
    Ok(())
}

/// Adds an existing participant to a tournament, optionally as captain
pub struct AddParticipantToTournamentUseCase {
    tournaments: Arc<dyn TournamentRepository>,
    participants: Arc<dyn ParticipantRepository>,
    members: Arc<dyn TournamentParticipantRepository>,
    locks: TournamentLocks,
}

impl AddParticipantToTournamentUseCase {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        participants: Arc<dyn ParticipantRepository>,
        members: Arc<dyn TournamentParticipantRepository>,
        locks: TournamentLocks,
    ) -> Self {
        Self {
            tournaments,
            participants,
            members,
            locks,
        }
    }

    pub async fn execute(
        &self,
        command: MembershipCommand,
    ) -> Result<TournamentParticipant, AppError> {
        let _guard = self.locks.acquire(&command.tournament_id).await;

        let tournament =
            require_tournament(self.tournaments.as_ref(), &command.tournament_id).await?;
        ensure_roster_open(&tournament)?;

        if self
            .participants
            .find_by_id(&command.participant_id)
            .await?
            .is_none()
        {
            return Err(AppError::business(
                ErrorCode::ParticipantNotFound,
                format!("Participant not found: {}", command.participant_id),
            ));
        }

        let already_member = self
            .members
            .find_by_tournament_and_participant(&command.tournament_id, &command.participant_id)
            .await?;
        if already_member.is_some() {
            return Err(already_in_tournament(&command));
        }

        let member = TournamentParticipant::create(
            command.tournament_id.clone(),
            command.participant_id.clone(),
            command.is_captain,
        );
        let saved = self.members.save(&member).await.map_err(|e| match e {
            RepositoryError::Conflict { .. } => already_in_tournament(&command),
            other => other.into(),
        })?;

        tracing::info!(
            tournament_id = %saved.tournament_id(),
            participant_id = %saved.participant_id(),
            is_captain = saved.is_captain(),
            "participant added to tournament"
        );
        Ok(saved)
    }
}

fn already_in_tournament(command: &MembershipCommand) -> AppError {
    AppError::business(
        ErrorCode::ParticipantAlreadyInTournament,
        format!(
            "Participant {} is already in tournament {}",
            command.participant_id, command.tournament_id
        ),
    )
}

/// Designates or removes a captain by replacing the membership
pub struct SetCaptainUseCase {
    tournaments: Arc<dyn TournamentRepository>,
    members: Arc<dyn TournamentParticipantRepository>,
    locks: TournamentLocks,
}

impl SetCaptainUseCase {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        members: Arc<dyn TournamentParticipantRepository>,
        locks: TournamentLocks,
    ) -> Self {
        Self {
            tournaments,
            members,
            locks,
        }
    }

    pub async fn execute(
        &self,
        command: MembershipCommand,
    ) -> Result<TournamentParticipant, AppError> {
        let _guard = self.locks.acquire(&command.tournament_id).await;

        let tournament =
            require_tournament(self.tournaments.as_ref(), &command.tournament_id).await?;
        ensure_roster_open(&tournament)?;

        let member = self
            .members
            .find_by_tournament_and_participant(&command.tournament_id, &command.participant_id)
            .await?
            .ok_or_else(|| DraftError::ParticipantNotInTournament(command.participant_id.clone()))?;

        let saved = self
            .members
            .save(&member.with_captain(command.is_captain))
            .await?;

        tracing::info!(
            tournament_id = %saved.tournament_id(),
            participant_id = %saved.participant_id(),
            is_captain = saved.is_captain(),
            "captaincy updated"
        );
        Ok(saved)
    }
}

/// Lists the members of a tournament in registration order
pub struct GetTournamentParticipantsUseCase {
    tournaments: Arc<dyn TournamentRepository>,
    members: Arc<dyn TournamentParticipantRepository>,
}

impl GetTournamentParticipantsUseCase {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        members: Arc<dyn TournamentParticipantRepository>,
    ) -> Self {
        Self {
            tournaments,
            members,
        }
    }

    pub async fn execute(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<TournamentParticipant>, AppError> {
        require_tournament(self.tournaments.as_ref(), tournament_id).await?;
        Ok(self.members.find_by_tournament(tournament_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::participant::Participant;
    use crate::infrastructure::repositories::{
        InMemoryParticipantRepository, InMemoryTournamentParticipantRepository,
        InMemoryTournamentRepository,
    };

    struct Harness {
        tournaments: Arc<InMemoryTournamentRepository>,
        participants: Arc<InMemoryParticipantRepository>,
        members: Arc<InMemoryTournamentParticipantRepository>,
        locks: TournamentLocks,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                tournaments: Arc::new(InMemoryTournamentRepository::new()),
                participants: Arc::new(InMemoryParticipantRepository::new()),
                members: Arc::new(InMemoryTournamentParticipantRepository::new()),
                locks: TournamentLocks::new(),
            }
        }

        fn add(&self) -> AddParticipantToTournamentUseCase {
            AddParticipantToTournamentUseCase::new(
                self.tournaments.clone(),
                self.participants.clone(),
                self.members.clone(),
                self.locks.clone(),
            )
        }

        fn set_captain(&self) -> SetCaptainUseCase {
            SetCaptainUseCase::new(
                self.tournaments.clone(),
                self.members.clone(),
                self.locks.clone(),
            )
        }

        async fn tournament(&self) -> Tournament {
            let t = Tournament::create("Splat Cup").unwrap();
            self.tournaments.save(&t).await.unwrap()
        }

        async fn participant(&self, name: &str) -> Participant {
            let p = Participant::create(name, "Splattershot", 100).unwrap();
            self.participants.save(&p).await.unwrap()
        }
    }

    fn command(t: &Tournament, p: &Participant, is_captain: bool) -> MembershipCommand {
        MembershipCommand {
            tournament_id: t.id().clone(),
            participant_id: p.id().clone(),
            is_captain,
        }
    }

    #[tokio::test]
    async fn add_participant_to_tournament() {
        let h = Harness::new();
        let t = h.tournament().await;
        let p = h.participant("Callie").await;

        let member = h.add().execute(command(&t, &p, true)).await.unwrap();

        assert!(member.is_captain());
        let listed = GetTournamentParticipantsUseCase::new(h.tournaments.clone(), h.members.clone())
            .execute(t.id())
            .await
            .unwrap();
        assert_eq!(listed, vec![member]);
    }

    #[tokio::test]
    async fn adding_twice_is_rejected() {
        let h = Harness::new();
        let t = h.tournament().await;
        let p = h.participant("Callie").await;

        h.add().execute(command(&t, &p, false)).await.unwrap();
        let err = h.add().execute(command(&t, &p, true)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ParticipantAlreadyInTournament);
    }

    #[tokio::test]
    async fn unknown_tournament_or_participant_is_rejected() {
        let h = Harness::new();
        let t = h.tournament().await;
        let p = h.participant("Callie").await;

        let err = h
            .add()
            .execute(MembershipCommand {
                tournament_id: TournamentId::create(),
                participant_id: p.id().clone(),
                is_captain: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TournamentNotFound);

        let err = h
            .add()
            .execute(MembershipCommand {
                tournament_id: t.id().clone(),
                participant_id: ParticipantId::create(),
                is_captain: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParticipantNotFound);
    }

    #[tokio::test]
    async fn roster_is_locked_once_draft_starts() {
        let h = Harness::new();
        let t = h.tournament().await;
        h.tournaments
            .save(&t.clone().start_draft().unwrap())
            .await
            .unwrap();
        let p = h.participant("Callie").await;

        let err = h.add().execute(command(&t, &p, false)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::DraftInProgress);
    }

    #[tokio::test]
    async fn set_captain_replaces_membership() {
        let h = Harness::new();
        let t = h.tournament().await;
        let p = h.participant("Marie").await;
        let member = h.add().execute(command(&t, &p, false)).await.unwrap();

        let captain = h.set_captain().execute(command(&t, &p, true)).await.unwrap();

        assert!(captain.is_captain());
        assert_eq!(captain.id(), member.id());
        let stored = h.members.find_by_tournament(t.id()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].is_captain());
    }

    #[tokio::test]
    async fn set_captain_for_non_member_fails() {
        let h = Harness::new();
        let t = h.tournament().await;
        let p = h.participant("Marie").await;

        let err = h.set_captain().execute(command(&t, &p, true)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParticipantNotInTournament);
    }
}
