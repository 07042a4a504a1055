//! User Registry - an in-memory user store with two front ends.
//!
//! Users are created, listed, fetched, replaced and deleted through a
//! REST API under `/users`, and listed or created through a GraphQL
//! schema at `/graphql`. Both share a single store per process.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `User` entity
//! - **services**: Use cases shared by both access layers
//! - **infra**: The in-memory store
//! - **api**: REST handlers, GraphQL schema, routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default port (8080)
//! cargo run -- serve
//!
//! # Start on another port with debug logging
//! cargo run -- -v serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserId, UserInput};
pub use errors::{AppError, AppResult};
pub use infra::UserStore;
