//! GraphQL access layer.
//!
//! Schema:
//! - **Queries**: `users`, `user(id)`
//! - **Mutations**: `createUser(name, email)`

mod schema;

pub use schema::{build_schema, MutationRoot, QueryRoot, UserSchema};
