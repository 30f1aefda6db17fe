//! Storage entity traits and types

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be used as storage keys
pub trait StorageKey: Copy + Debug + Display + Send + Sync + Eq + Hash {}

impl<T> StorageKey for T where T: Copy + Debug + Display + Send + Sync + Eq + Hash {}

/// Trait for types that can be stored
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this entity
    type Key: StorageKey;

    /// Returns the entity's key
    fn key(&self) -> Self::Key;
}
