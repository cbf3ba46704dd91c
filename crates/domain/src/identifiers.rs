//! Strongly-typed identifier types for the basketball registry domain.
//!
//! Identifiers are assigned by the relational store (`BIGSERIAL`), so they wrap
//! an `i64` rather than a generated value. Wrapping them keeps a player id from
//! being passed where a team id is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store identifier
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw store identifier
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(PlayerId, "Store-assigned identifier of a player");

define_id!(
    TeamId,
    "Identifier of a team (the team entity itself is owned elsewhere)"
);
