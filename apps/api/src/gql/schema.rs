use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type DraftSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject `AppState` into the resolver context.
pub fn build_schema(state: AppState, introspection: bool) -> DraftSchema {
    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .limit_depth(10)
    .limit_complexity(200);

    if !introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
