//! User domain entity and related types.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier. Allocation starts at 1.
pub type UserId = u64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the store
    #[schema(example = 1)]
    pub id: UserId,
    /// Display name
    #[schema(example = "alice")]
    pub name: String,
    /// Contact email (no format constraints)
    #[schema(example = "a@x.com")]
    pub email: String,
}

impl User {
    /// Build a user record from an allocated id and its input fields
    pub fn new(id: UserId, input: UserInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }

    /// Replace name and email wholesale, keeping the id
    pub fn apply(&mut self, input: UserInput) {
        self.name = input.name;
        self.email = input.email;
    }
}

/// Create/replace payload. Both fields are required; any `id` sent by the
/// client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserInput {
    /// Display name
    #[schema(example = "alice")]
    pub name: String,
    /// Contact email
    #[schema(example = "a@x.com")]
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
