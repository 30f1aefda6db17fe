//! Mention extraction and validation services

mod service;

pub use service::{MentionService, MentionServiceDeps};
