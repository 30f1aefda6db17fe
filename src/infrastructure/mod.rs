//! Infrastructure layer - Storage, lookups and services

pub mod actor;
pub mod directory;
pub mod logging;
pub mod membership;
pub mod mention;
pub mod project;
pub mod storage;
pub mod team;
pub mod user;
