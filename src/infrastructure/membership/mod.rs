//! Membership infrastructure - team, project and association lookups

mod in_memory;

pub use in_memory::InMemoryMembershipStore;
