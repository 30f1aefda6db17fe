//! User domain
//!
//! Accounts that can be mentioned directly or through their teams.

mod entity;
mod repository;

pub use entity::{User, UserId, UserStatus};
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::MockUserRepository;
