// Shared kernel: building blocks used by every aggregate

pub mod id;

pub use id::{
    DraftId, Id, IdKind, ParticipantId, TeamId, TournamentId, TournamentParticipantId,
};
