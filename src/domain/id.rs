//! Numeric identifier types shared by the directory entities

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` for a type-safe identifier.
///
/// `Display` renders the identifier with its kind prefix (`user:1`), which is
/// also the textual form accepted by [`crate::domain::actor::Actor`].
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:expr
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Prefix used by the `Display` form
            pub const PREFIX: &'static str = $prefix;

            #[inline]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            #[inline]
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}:{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// Organization owning teams and projects
    OrganizationId, "organization"
);

define_id!(
    /// Project whose members may be mentioned
    ProjectId, "project"
);

define_id!(
    /// Team that can be mentioned as a whole
    TeamId, "team"
);

define_id!(
    /// User account
    UserId, "user"
);

define_id!(
    /// Issue group that notes are attached to
    GroupId, "group"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_prefix() {
        assert_eq!(UserId::new(1).to_string(), "user:1");
        assert_eq!(TeamId::new(5).to_string(), "team:5");
        assert_eq!(ProjectId::new(9).to_string(), "project:9");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&UserId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: TeamId = serde_json::from_str("7").unwrap();
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn test_ordering_follows_value() {
        let mut ids = vec![UserId::new(3), UserId::new(1), UserId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![UserId::new(1), UserId::new(2), UserId::new(3)]);
    }
}
