// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_draft_repository;
pub mod postgres_draft_unit_of_work;
pub mod postgres_participant_repository;
pub mod postgres_tournament_participant_repository;
pub mod postgres_tournament_repository;
pub mod unit_of_work;

pub use in_memory::{
    InMemoryDraftRepository, InMemoryParticipantRepository,
    InMemoryTournamentParticipantRepository, InMemoryTournamentRepository,
};
pub use postgres_draft_repository::PostgresDraftRepository;
pub use postgres_draft_unit_of_work::PostgresDraftUnitOfWork;
pub use postgres_participant_repository::PostgresParticipantRepository;
pub use postgres_tournament_participant_repository::PostgresTournamentParticipantRepository;
pub use postgres_tournament_repository::PostgresTournamentRepository;
pub use unit_of_work::CompensatingDraftUnitOfWork;

use crate::domain::repositories::{ConflictKind, RepositoryError};
use postgres_draft_repository::{PARTICIPANT_CONSTRAINT, TURN_CONSTRAINT};

/// Maps a sqlx error, reporting unique violations as conflicts
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |e| {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                let kind = match db.constraint() {
                    Some(TURN_CONSTRAINT) => ConflictKind::DraftTurn,
                    Some(PARTICIPANT_CONSTRAINT) => ConflictKind::DraftedParticipant,
                    _ => ConflictKind::Duplicate,
                };
                return RepositoryError::conflict(
                    kind,
                    format!("{}: {}", context, db.message()),
                );
            }
        }
        RepositoryError::Storage(format!("{}: {}", context, e))
    }
}
