//! HTTP request handlers.

pub mod graphql_handler;
pub mod health_handler;
pub mod user_handler;

pub use graphql_handler::graphql_routes;
pub use health_handler::health_routes;
pub use user_handler::user_routes;
