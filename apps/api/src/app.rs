use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    response::{Html, IntoResponse},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{draft, health, participants, tournaments};
use crate::gql::DraftSchema;
use crate::state::AppState;

/// Build the router: health check, REST endpoints and GraphQL
pub fn build_router(state: AppState, schema: DraftSchema) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Tournament routes
        .route(
            "/api/tournaments",
            post(tournaments::create_tournament).get(tournaments::list_tournaments),
        )
        .route("/api/tournaments/{id}", get(tournaments::get_tournament))
        .route(
            "/api/tournaments/{id}/participants",
            post(tournaments::add_participant).get(tournaments::list_members),
        )
        .route(
            "/api/tournaments/{id}/participants/{participant_id}/captain",
            put(tournaments::set_captain),
        )
        // Participant routes
        .route(
            "/api/participants",
            post(participants::create_participant).get(participants::list_participants),
        )
        .route("/api/participants/{id}", get(participants::get_participant))
        // Draft routes
        .route("/api/tournaments/{id}/draft/start", post(draft::start_draft))
        .route("/api/tournaments/{id}/draft/nominations", post(draft::nominate))
        .route(
            "/api/tournaments/{id}/draft",
            get(draft::list_drafts).delete(draft::reset_draft),
        )
        .route("/api/tournaments/{id}/draft/state", get(draft::draft_state))
        // GraphQL endpoint; GET serves GraphiQL
        .route(
            "/graphql",
            post(move |req: GraphQLRequest| graphql_handler(schema, req)).get(graphiql),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

async fn graphql_handler(schema: DraftSchema, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
