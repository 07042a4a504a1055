//! User repository backed by an in-memory map.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::{User, UserId, UserInput};
use crate::infra::{StoreError, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups that miss return `None` rather than an error; the service
/// layer decides what a miss means for its caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Allocate the next id and insert a new user
    async fn create(&self, input: UserInput) -> StoreResult<User>;

    /// Snapshot of every stored user, ascending by id
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Find user by id
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Replace name and email of an existing user. Never inserts.
    async fn update(&self, id: UserId, input: UserInput) -> StoreResult<Option<User>>;

    /// Remove a user, returning whether a record was present
    async fn delete(&self, id: UserId) -> StoreResult<bool>;

    /// Remove every user. The id counter is left untouched.
    async fn clear(&self) -> StoreResult<()>;

    /// Number of stored users
    async fn count(&self) -> StoreResult<usize>;
}

/// Records and id counter, always guarded together.
#[derive(Debug)]
struct Inner {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// Concurrency-safe in-memory implementation of `UserRepository`.
///
/// Every operation holds the lock for its whole duration, so id
/// allocation and insertion happen in one critical section and readers
/// never see a half-applied write.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<Inner>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store whose first id will be 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, input: UserInput) -> StoreResult<User> {
        let mut inner = self.write()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let user = User::new(id, input);
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let inner = self.read()?;
        Ok(inner.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let inner = self.read()?;
        Ok(inner.users.get(&id).cloned())
    }

    async fn update(&self, id: UserId, input: UserInput) -> StoreResult<Option<User>> {
        let mut inner = self.write()?;
        Ok(inner.users.get_mut(&id).map(|user| {
            user.apply(input);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> StoreResult<bool> {
        let mut inner = self.write()?;
        Ok(inner.users.remove(&id).is_some())
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut inner = self.write()?;
        inner.users.clear();
        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        let inner = self.read()?;
        Ok(inner.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn input(name: &str) -> UserInput {
        UserInput::new(name, format!("{}@x.com", name))
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = UserStore::new();

        let alice = store.create(input("alice")).await.unwrap();
        let bob = store.create(input("bob")).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(alice));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = UserStore::new();
        for name in ["carol", "alice", "bob"] {
            store.create(input(name)).await.unwrap();
        }
        store.delete(2).await.unwrap();

        let ids: Vec<UserId> = store.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = UserStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = UserStore::new();
        let created = store.create(input("alice")).await.unwrap();

        let updated = store
            .update(created.id, UserInput::new("alicia", "alicia@x.com"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "alicia");
        assert_eq!(
            store.find_by_id(created.id).await.unwrap().unwrap().email,
            "alicia@x.com"
        );
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let store = UserStore::new();

        let result = store.update(999, input("bob")).await.unwrap();

        assert!(result.is_none());
        assert!(store.find_by_id(999).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let store = UserStore::new();
        let user = store.create(input("alice")).await.unwrap();

        assert!(store.delete(user.id).await.unwrap());
        assert!(!store.delete(user.id).await.unwrap());
        assert!(!store.delete(42).await.unwrap());
        assert!(store.find_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let store = UserStore::new();
        let first = store.create(input("alice")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(input("bob")).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_clear_keeps_counter() {
        let store = UserStore::new();
        for name in ["alice", "bob", "carol"] {
            store.create(input(name)).await.unwrap();
        }

        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());

        let next = store.create(input("dave")).await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(UserStore::new());
        let calls = 200;

        let handles: Vec<_> = (0..calls)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(input(&format!("user{}", i))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let user = handle.await.unwrap().unwrap();
            assert!(ids.insert(user.id), "duplicate id {}", user.id);
        }

        assert_eq!(ids.len(), calls);
        assert_eq!(store.count().await.unwrap(), calls);
        assert_eq!(ids.iter().max().copied(), Some(calls as UserId));
    }
}
