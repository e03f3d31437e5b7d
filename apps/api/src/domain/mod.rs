// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of transport and storage concerns

pub mod draft;
pub mod errors;
pub mod participant;
pub mod repositories;
pub mod shared;
pub mod tournament;

pub use errors::ValidationError;
