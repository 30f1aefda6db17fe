//! Project infrastructure implementations

mod repository;

pub use repository::StorageProjectRepository;
