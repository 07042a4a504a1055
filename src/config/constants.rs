//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Routes
// =============================================================================

/// REST collection path
pub const USERS_PATH: &str = "/users";

/// GraphQL endpoint path
pub const GRAPHQL_PATH: &str = "/graphql";

/// OpenAPI document path
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Swagger UI path
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
