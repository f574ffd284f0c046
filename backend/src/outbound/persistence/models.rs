//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpId, NewChirp, NewUser, User, UserId};

use super::schema::{chirps, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            created_at: row.created_at,
            updated_at: row.updated_at,
            email: row.email,
        }
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            id: *user.id.as_uuid(),
            created_at: user.created_at,
            updated_at: user.created_at,
            email: user.email.as_str(),
        }
    }
}

/// Row struct for reading from the chirps table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chirps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChirpRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<ChirpRow> for Chirp {
    fn from(row: ChirpRow) -> Self {
        Self {
            id: ChirpId::from_uuid(row.id),
            created_at: row.created_at,
            updated_at: row.updated_at,
            body: row.body,
            user_id: UserId::from_uuid(row.user_id),
        }
    }
}

/// Insertable struct for creating new chirp records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chirps)]
pub(crate) struct NewChirpRow<'a> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: &'a str,
    pub user_id: Uuid,
}

impl<'a> From<&'a NewChirp> for NewChirpRow<'a> {
    fn from(chirp: &'a NewChirp) -> Self {
        Self {
            id: *chirp.id.as_uuid(),
            created_at: chirp.created_at,
            updated_at: chirp.created_at,
            body: chirp.body.as_ref(),
            user_id: *chirp.user_id.as_uuid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChirpBody;

    #[test]
    fn new_chirp_row_mirrors_domain_payload() {
        let new_chirp = NewChirp::new(
            ChirpBody::new("sharbert time").expect("valid body"),
            UserId::random(),
            Utc::now(),
        );

        let row = NewChirpRow::from(&new_chirp);

        assert_eq!(row.id, *new_chirp.id.as_uuid());
        assert_eq!(row.user_id, *new_chirp.user_id.as_uuid());
        assert_eq!(row.body, "**** time");
        assert_eq!(row.created_at, row.updated_at);
    }

    #[test]
    fn chirp_row_maps_to_domain() {
        let now = Utc::now();
        let row = ChirpRow {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: "hello".to_owned(),
            user_id: Uuid::new_v4(),
        };

        let chirp = Chirp::from(row.clone());

        assert_eq!(chirp.id.as_uuid(), &row.id);
        assert_eq!(chirp.user_id.as_uuid(), &row.user_id);
        assert_eq!(chirp.body, row.body);
    }
}
