// Infrastructure layer module
// Contains database adapters
// Follows Hexagonal Architecture

pub mod repositories;
