//! Typed ID definitions for domain entities.
//!
//! Members and counts use integer keys. Churches use an opaque string key and
//! are the tenant boundary, so `ChurchId` has no `Default` and can only be
//! built through [`ChurchId::parse`] or loaded from the database.
//!
//! ```rust
//! use platesync_core::common::{ChurchId, MemberId};
//!
//! let church = ChurchId::parse("ORG1").unwrap();
//! let member = MemberId::parse("42").unwrap();
//! assert_eq!(church.as_str(), "ORG1");
//! assert_eq!(member.as_i32(), 42);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing identifiers from untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("church id must not be empty")]
    EmptyChurchId,

    #[error("{kind} id must be a positive integer, got {value:?}")]
    InvalidNumericId { kind: &'static str, value: String },
}

fn parse_positive(kind: &'static str, value: &str) -> Result<i32, IdError> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(IdError::InvalidNumericId {
            kind,
            value: value.to_string(),
        }),
    }
}

// ============================================================================
// Church
// ============================================================================

/// Identifier of the owning organization (church).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct ChurchId(String);

impl ChurchId {
    pub fn parse(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IdError::EmptyChurchId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ChurchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChurchId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChurchId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ChurchId> for String {
    fn from(id: ChurchId) -> Self {
        id.0
    }
}

// ============================================================================
// Member / Count
// ============================================================================

/// Typed ID for Member entities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct MemberId(i32);

/// Typed ID for Count (collection batch) entities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct CountId(i32);

macro_rules! numeric_id {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            pub fn parse(value: &str) -> Result<Self, IdError> {
                parse_positive($kind, value).map(Self)
            }

            pub fn from_i32(id: i32) -> Self {
                Self(id)
            }

            pub fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

numeric_id!(MemberId, "member");
numeric_id!(CountId, "count");
