//! GraphQL endpoint handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::config::GRAPHQL_PATH;

/// Create GraphQL routes
pub fn graphql_routes() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(graphiql).post(graphql))
}

/// Execute a query or mutation document
pub async fn graphql(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Interactive GraphiQL page
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
