//! Domain layer - Core business entities
//!
//! The registry manages a single entity type, `User`. Domain types carry
//! no infrastructure concerns beyond their serialization shapes.

pub mod user;

pub use user::{User, UserId, UserInput};
