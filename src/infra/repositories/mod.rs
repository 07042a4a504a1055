//! Repository layer - Data access abstraction
//!
//! Repositories hide the storage behind a trait so the service layer
//! can be exercised against mocks.

mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
