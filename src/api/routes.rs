//! Application route configuration.

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{graphql_routes, health_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{Config, OPENAPI_PATH, SWAGGER_UI_PATH};

/// Create the application router with all routes configured
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        // Health check endpoints
        .merge(health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        // REST access layer
        .merge(user_routes())
        // GraphQL access layer
        .merge(graphql_routes())
        // Global middleware
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
