//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserId, UserInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user; the id is assigned by the store
    async fn create_user(&self, input: UserInput) -> AppResult<User>;

    /// List all users, ascending by id
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by id
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Replace name and email of an existing user
    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<User>;

    /// Delete user by id. Deleting an absent id succeeds.
    async fn delete_user(&self, id: UserId) -> AppResult<()>;

    /// Delete every user
    async fn clear_users(&self) -> AppResult<()>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        let user = self.repo.create(input).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list().await?)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<User> {
        let user = self.repo.update(id, input).await?.ok_or_not_found()?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if self.repo.delete(id).await? {
            tracing::info!(user_id = id, "User deleted");
        } else {
            tracing::debug!(user_id = id, "Delete of absent user ignored");
        }
        Ok(())
    }

    async fn clear_users(&self) -> AppResult<()> {
        self.repo.clear().await?;
        tracing::info!("All users deleted");
        Ok(())
    }

    async fn count_users(&self) -> AppResult<usize> {
        Ok(self.repo.count().await?)
    }
}
