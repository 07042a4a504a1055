//! API layer - HTTP handlers and routes
//!
//! Two independent front ends share one `UserService`:
//! - REST handlers under `/users`
//! - a GraphQL schema under `/graphql`

pub mod extractors;
pub mod graphql;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use graphql::{build_schema, UserSchema};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
