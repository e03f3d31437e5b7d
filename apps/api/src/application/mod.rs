//! Application layer
//!
//! Use cases orchestrate domain entities and repository ports. They are the
//! only entry point the transports (REST, GraphQL) call into.

pub mod errors;
pub mod locks;
pub mod use_cases;

pub use errors::{AppError, ErrorClassification, ErrorCode};
pub use locks::TournamentLocks;
