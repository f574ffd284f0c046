//! User data model.
//!
//! Users are registered by email alone. The email is stored as supplied;
//! uniqueness and format are left to the storage layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Registered user.
///
/// Serialises with snake_case keys: `id`, `created_at`, `updated_at`,
/// `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// Insert payload for a user whose identifier and timestamps were assigned
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Assign a fresh identifier to `email`, stamped at `now`.
    #[must_use]
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::random(),
            email: email.into(),
            created_at: now,
        }
    }

    /// The user as stored: both timestamps equal the creation instant.
    #[must_use]
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.created_at,
            email: self.email,
        }
    }
}
