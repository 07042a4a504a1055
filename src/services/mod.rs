//! Application services layer - Use cases.
//!
//! Both access layers (REST and GraphQL) call into the same
//! `UserService`; neither talks to the repository directly.

mod user_service;

pub use user_service::{UserManager, UserService};
