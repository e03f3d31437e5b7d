// GraphQL surface: schema, resolvers and error mapping

pub mod error;
pub mod mutations;
pub mod queries;
pub mod schema;
pub mod types;

use async_graphql::MergedObject;

pub use schema::{build_schema, DraftSchema};

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    queries::TournamentQuery,
    queries::ParticipantQuery,
    queries::DraftQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    mutations::TournamentMutation,
    mutations::ParticipantMutation,
    mutations::DraftMutation,
);
