//! User infrastructure implementations

mod repository;

pub use repository::StorageUserRepository;
