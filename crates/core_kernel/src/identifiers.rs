//! Strongly-typed display identifiers for back-office records
//!
//! Every record is addressed by a prefixed, zero-padded sequence number
//! such as `APP-001` or `CLM-012`. Newtype wrappers keep an application id
//! from being passed where a claim id is expected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a valid identifier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {prefix} identifier: {input}")]
pub struct IdParseError {
    pub prefix: &'static str,
    pub input: String,
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Creates an identifier from its sequence number
            pub const fn new(sequence: u32) -> Self {
                Self(sequence)
            }

            /// Returns the sequence number
            pub fn sequence(&self) -> u32 {
                self.0
            }

            /// Returns the identifier that follows this one
            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{:03}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let invalid = || IdParseError {
                    prefix: $prefix,
                    input: s.to_string(),
                };
                let digits = s
                    .strip_prefix(concat!($prefix, "-"))
                    .ok_or_else(invalid)?;
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                digits.parse::<u32>().map(Self).map_err(|_| invalid())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(ApplicationId, "APP");
define_id!(ClaimId, "CLM");
define_id!(PaymentId, "PAY");
define_id!(BatchId, "BATCH");
define_id!(UserId, "USR");
define_id!(VetId, "VET");


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn display_then_parse_is_identity(n in 0u32..1_000_000u32) {
            let id = ClaimId::new(n);
            prop_assert_eq!(id.to_string().parse::<ClaimId>().unwrap(), id);
        }
    }
}
