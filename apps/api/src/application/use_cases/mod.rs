// Use cases: one struct per operation, each wired with the ports it needs

pub mod draft;
pub mod membership;
pub mod participants;
pub mod tournaments;

pub use draft::{
    DraftPorts, DraftState, GetDraftStateUseCase, GetDraftsUseCase, NominateParticipantCommand,
    NominateParticipantUseCase, ResetDraftOutcome, ResetDraftUseCase, StartDraftUseCase,
};
pub use membership::{
    AddParticipantToTournamentUseCase, GetTournamentParticipantsUseCase, MembershipCommand,
    SetCaptainUseCase,
};
pub use participants::{
    CreateParticipantCommand, CreateParticipantUseCase, GetParticipantUseCase,
    GetParticipantsUseCase,
};
pub use tournaments::{CreateTournamentUseCase, GetTournamentUseCase, GetTournamentsUseCase};

use crate::application::errors::{AppError, ErrorCode};
use crate::domain::repositories::TournamentRepository;
use crate::domain::shared::TournamentId;
use crate::domain::tournament::Tournament;

/// Loads a tournament or fails with `TOURNAMENT_NOT_FOUND`
pub(crate) async fn require_tournament(
    tournaments: &dyn TournamentRepository,
    id: &TournamentId,
) -> Result<Tournament, AppError> {
    tournaments.find_by_id(id).await?.ok_or_else(|| {
        AppError::business(
            ErrorCode::TournamentNotFound,
            format!("Tournament not found: {}", id),
        )
    })
}
