// Repository ports
// Implemented by adapters in the infrastructure layer

pub mod draft_repository;
pub mod draft_unit_of_work;
pub mod errors;
pub mod participant_repository;
pub mod tournament_participant_repository;
pub mod tournament_repository;

pub use draft_repository::DraftRepository;
pub use draft_unit_of_work::DraftUnitOfWork;
pub use errors::{ConflictKind, RepositoryError};
pub use participant_repository::ParticipantRepository;
pub use tournament_participant_repository::TournamentParticipantRepository;
pub use tournament_repository::TournamentRepository;
