// Tournament domain module
// Contains the tournament aggregate, its membership entity and value objects

#![allow(clippy::module_inception)]

pub mod tournament;
pub mod tournament_participant;
pub mod value_objects;

// Re-export main types for convenience
pub use tournament::Tournament;
pub use tournament_participant::TournamentParticipant;
pub use value_objects::TournamentName;
