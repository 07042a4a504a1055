//! Application state shared by every request handler.

use std::sync::Arc;

use super::graphql::{build_schema, UserSchema};
use crate::infra::UserStore;
use crate::services::{UserManager, UserService};

/// Application state containing the user service and the GraphQL
/// schema built on top of it.
///
/// Cloning is cheap; all clones point at the same store.
#[derive(Clone)]
pub struct AppState {
    /// User service used by both access layers
    pub user_service: Arc<dyn UserService>,
    /// Executable GraphQL schema
    pub schema: UserSchema,
}

impl AppState {
    /// Create application state around an existing service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        let schema = build_schema(user_service.clone());
        Self {
            user_service,
            schema,
        }
    }

    /// Create application state backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(UserStore::new());
        Self::new(Arc::new(UserManager::new(store)))
    }
}
