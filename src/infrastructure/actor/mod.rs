//! Actor resolution against the user and team repositories

mod resolver;

pub use resolver::ActorResolver;
