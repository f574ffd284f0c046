//! Chirp data model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;
use crate::domain::moderation::moderate;

/// Maximum chirp length in characters, measured before moderation.
pub const CHIRP_MAX_LENGTH: usize = 140;

/// Validation errors returned by [`ChirpBody::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChirpValidationError {
    #[error("chirp must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Stable chirp identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChirpId(Uuid);

impl ChirpId {
    /// Generate a new random [`ChirpId`].
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

impl fmt::Display for ChirpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ChirpId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Length-checked, moderated chirp text.
///
/// ## Invariants
/// - The raw input was at most [`CHIRP_MAX_LENGTH`] characters.
/// - The stored text is the moderated form of that input.
///
/// # Examples
/// ```
/// use chirpy::domain::{ChirpBody, ChirpValidationError};
///
/// let body = ChirpBody::new("What a kerfuffle").expect("short enough");
/// assert_eq!(body.as_ref(), "What a ****");
///
/// let long = "x".repeat(141);
/// assert_eq!(
///     ChirpBody::new(long),
///     Err(ChirpValidationError::TooLong { max: 140, actual: 141 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    /// Validate the length of `raw` and moderate it.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ChirpValidationError> {
        let raw = raw.as_ref();
        let actual = raw.chars().count();
        if actual > CHIRP_MAX_LENGTH {
            return Err(ChirpValidationError::TooLong {
                max: CHIRP_MAX_LENGTH,
                actual,
            });
        }
        Ok(Self(moderate(raw)))
    }
}

impl AsRef<str> for ChirpBody {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ChirpBody> for String {
    fn from(value: ChirpBody) -> Self {
        value.0
    }
}

/// Stored chirp.
///
/// Serialises with snake_case keys: `id`, `created_at`, `updated_at`,
/// `body`, `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: ChirpId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: UserId,
}

/// Insert payload for a chirp whose identifier and timestamps were assigned
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChirp {
    pub id: ChirpId,
    pub body: ChirpBody,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewChirp {
    /// Assign a fresh identifier to `body` owned by `user_id`, stamped at `now`.
    #[must_use]
    pub fn new(body: ChirpBody, user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: ChirpId::random(),
            body,
            user_id,
            created_at: now,
        }
    }

    /// The chirp as stored: both timestamps equal the creation instant.
    #[must_use]
    pub fn into_chirp(self) -> Chirp {
        Chirp {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.created_at,
            body: self.body.into(),
            user_id: self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(CHIRP_MAX_LENGTH)]
    fn accepts_bodies_up_to_the_limit(#[case] length: usize) {
        let raw = "a".repeat(length);
        let body = ChirpBody::new(&raw).expect("within limit");
        assert_eq!(body.as_ref(), raw);
    }

    #[rstest]
    fn rejects_one_past_the_limit() {
        let raw = "a".repeat(CHIRP_MAX_LENGTH + 1);
        assert_eq!(
            ChirpBody::new(raw),
            Err(ChirpValidationError::TooLong {
                max: CHIRP_MAX_LENGTH,
                actual: CHIRP_MAX_LENGTH + 1,
            })
        );
    }

    #[rstest]
    fn counts_characters_not_bytes() {
        let raw = "é".repeat(CHIRP_MAX_LENGTH);
        assert!(raw.len() > CHIRP_MAX_LENGTH);
        assert!(ChirpBody::new(raw).is_ok());
    }

    #[rstest]
    fn length_is_measured_before_moderation() {
        // "kerfuffle" (9 chars) shrinks to "****" once masked.
        let raw = format!("kerfuffle {}", "a".repeat(CHIRP_MAX_LENGTH - 9));
        assert!(ChirpBody::new(raw).is_err());
    }

    #[rstest]
    fn into_chirp_keeps_owner_and_moderated_text() {
        let owner = UserId::random();
        let body = ChirpBody::new("fornax rising").expect("valid body");
        let new_chirp = NewChirp::new(body, owner, Utc::now());
        let id = new_chirp.id;

        let chirp = new_chirp.into_chirp();
        assert_eq!(chirp.id, id);
        assert_eq!(chirp.user_id, owner);
        assert_eq!(chirp.body, "**** rising");
        assert_eq!(chirp.created_at, chirp.updated_at);
    }
}
