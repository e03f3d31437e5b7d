use std::sync::Arc;

use sqlx::PgPool;

use crate::application::use_cases::{
    AddParticipantToTournamentUseCase, CreateParticipantUseCase, CreateTournamentUseCase,
    DraftPorts, GetDraftStateUseCase, GetDraftsUseCase, GetParticipantUseCase,
    GetParticipantsUseCase, GetTournamentParticipantsUseCase, GetTournamentUseCase,
    GetTournamentsUseCase, NominateParticipantUseCase, ResetDraftUseCase, SetCaptainUseCase,
    StartDraftUseCase,
};
use crate::application::TournamentLocks;
use crate::domain::repositories::{
    DraftRepository, DraftUnitOfWork, ParticipantRepository, TournamentParticipantRepository,
    TournamentRepository,
};
use crate::infrastructure::repositories::{
    CompensatingDraftUnitOfWork, InMemoryDraftRepository, InMemoryParticipantRepository,
    InMemoryTournamentParticipantRepository, InMemoryTournamentRepository,
    PostgresDraftRepository, PostgresDraftUnitOfWork, PostgresParticipantRepository,
    PostgresTournamentParticipantRepository, PostgresTournamentRepository,
};

/// Repository adapters the application runs against
#[derive(Clone)]
pub struct Repositories {
    pub tournaments: Arc<dyn TournamentRepository>,
    pub participants: Arc<dyn ParticipantRepository>,
    pub members: Arc<dyn TournamentParticipantRepository>,
    pub drafts: Arc<dyn DraftRepository>,
    /// Writes of start, nominate and reset, committed together
    pub unit_of_work: Arc<dyn DraftUnitOfWork>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            tournaments: Arc::new(PostgresTournamentRepository::new(pool.clone())),
            participants: Arc::new(PostgresParticipantRepository::new(pool.clone())),
            members: Arc::new(PostgresTournamentParticipantRepository::new(pool.clone())),
            drafts: Arc::new(PostgresDraftRepository::new(pool.clone())),
            unit_of_work: Arc::new(PostgresDraftUnitOfWork::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        let tournaments: Arc<dyn TournamentRepository> =
            Arc::new(InMemoryTournamentRepository::new());
        let participants: Arc<dyn ParticipantRepository> =
            Arc::new(InMemoryParticipantRepository::new());
        let drafts: Arc<dyn DraftRepository> = Arc::new(InMemoryDraftRepository::new());
        let unit_of_work = Arc::new(CompensatingDraftUnitOfWork::new(
            tournaments.clone(),
            participants.clone(),
            drafts.clone(),
        ));

        Self {
            tournaments,
            participants,
            members: Arc::new(InMemoryTournamentParticipantRepository::new()),
            drafts,
            unit_of_work,
        }
    }
}

/// Every use case, wired once and shared by the REST and GraphQL layers
pub struct UseCases {
    pub create_tournament: CreateTournamentUseCase,
    pub get_tournaments: GetTournamentsUseCase,
    pub get_tournament: GetTournamentUseCase,
    pub create_participant: CreateParticipantUseCase,
    pub get_participants: GetParticipantsUseCase,
    pub get_participant: GetParticipantUseCase,
    pub add_participant: AddParticipantToTournamentUseCase,
    pub set_captain: SetCaptainUseCase,
    pub get_tournament_participants: GetTournamentParticipantsUseCase,
    pub start_draft: StartDraftUseCase,
    pub nominate: NominateParticipantUseCase,
    pub reset_draft: ResetDraftUseCase,
    pub get_drafts: GetDraftsUseCase,
    pub get_draft_state: GetDraftStateUseCase,
}

impl UseCases {
    pub fn new(repos: Repositories) -> Self {
        // one lock table for every use case that mutates a tournament
        let locks = TournamentLocks::new();
        let ports = DraftPorts {
            tournaments: repos.tournaments.clone(),
            participants: repos.participants.clone(),
            members: repos.members.clone(),
            drafts: repos.drafts.clone(),
            unit_of_work: repos.unit_of_work.clone(),
            locks: locks.clone(),
        };

        Self {
            create_tournament: CreateTournamentUseCase::new(repos.tournaments.clone()),
            get_tournaments: GetTournamentsUseCase::new(repos.tournaments.clone()),
            get_tournament: GetTournamentUseCase::new(repos.tournaments.clone()),
            create_participant: CreateParticipantUseCase::new(repos.participants.clone()),
            get_participants: GetParticipantsUseCase::new(repos.participants.clone()),
            get_participant: GetParticipantUseCase::new(repos.participants.clone()),
            add_participant: AddParticipantToTournamentUseCase::new(
                repos.tournaments.clone(),
                repos.participants.clone(),
                repos.members.clone(),
                locks.clone(),
            ),
            set_captain: SetCaptainUseCase::new(
                repos.tournaments.clone(),
                repos.members.clone(),
                locks,
            ),
            get_tournament_participants: GetTournamentParticipantsUseCase::new(
                repos.tournaments,
                repos.members,
            ),
            start_draft: StartDraftUseCase::new(ports.clone()),
            nominate: NominateParticipantUseCase::new(ports.clone()),
            reset_draft: ResetDraftUseCase::new(ports.clone()),
            get_drafts: GetDraftsUseCase::new(ports.clone()),
            get_draft_state: GetDraftStateUseCase::new(ports),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    use_cases: Arc<UseCases>,
}

impl AppState {
    pub fn new(repos: Repositories) -> Self {
        Self {
            use_cases: Arc::new(UseCases::new(repos)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Repositories::postgres(pool))
    }

    /// State backed by process-local storage; nothing survives a restart
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory())
    }

    pub fn use_cases(&self) -> &UseCases {
        &self.use_cases
    }
}
