//! Splat Draft API Library
//!
//! Tournaments, participants and captain-led drafts: domain model, use
//! cases, storage adapters, and the REST and GraphQL surfaces over them.

pub mod api;
pub mod app;
pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod gql;
pub mod infrastructure;
pub mod state;
