//! GraphQL schema and resolvers.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::domain::{User, UserId, UserInput};
use crate::errors::AppError;
use crate::services::UserService;

/// Executable schema type shared through `AppState`.
pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the user service attached as context data.
pub fn build_schema(user_service: Arc<dyn UserService>) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(user_service)
        .finish()
}

fn user_service<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a Arc<dyn UserService>> {
    ctx.data::<Arc<dyn UserService>>()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users, ascending by id
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        user_service(ctx)?.list_users().await.map_err(|e| e.extend())
    }

    /// A single user, or null when no user has this id
    async fn user(&self, ctx: &Context<'_>, id: UserId) -> async_graphql::Result<Option<User>> {
        match user_service(ctx)?.get_user(id).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::NotFound) => Ok(None),
            Err(e) => Err(e.extend()),
        }
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user. Both arguments are required; the id is assigned
    /// by the store.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> async_graphql::Result<User> {
        user_service(ctx)?
            .create_user(UserInput::new(name, email))
            .await
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppState;

    fn schema() -> UserSchema {
        AppState::in_memory().schema
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let schema = schema();

        let created = schema
            .execute(r#"mutation { createUser(name: "alice", email: "a@x.com") { id name } }"#)
            .await;
        assert!(created.errors.is_empty(), "{:?}", created.errors);
        assert_eq!(
            created.data.into_json().unwrap(),
            serde_json::json!({ "createUser": { "id": 1, "name": "alice" } })
        );

        let listed = schema.execute("{ users { name email } }").await;
        assert_eq!(
            listed.data.into_json().unwrap(),
            serde_json::json!({ "users": [{ "name": "alice", "email": "a@x.com" }] })
        );
    }

    #[tokio::test]
    async fn test_missing_argument_is_validation_error() {
        let schema = schema();

        let response = schema
            .execute(r#"mutation { createUser(name: "alice") { name } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("email"));
        assert_eq!(
            schema.execute("{ users { id } }").await.data.into_json().unwrap(),
            serde_json::json!({ "users": [] })
        );
    }

    #[tokio::test]
    async fn test_wrong_argument_type_is_validation_error() {
        let response = schema()
            .execute(r#"mutation { createUser(name: "alice", email: 5) { name } }"#)
            .await;

        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_is_null() {
        let response = schema().execute("{ user(id: 42) { name } }").await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "user": null })
        );
    }
}
