//! Infrastructure layer - Storage concerns
//!
//! The registry keeps all records in process memory. Nothing here
//! survives a restart.

mod error;
pub mod repositories;

pub use error::{StoreError, StoreResult};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
