//! Row types mapping the `users` table to the domain record.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{UserId, UserRecord, Username};

use super::schema::users;

/// Read model for a stored user.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::try_new(&row.username)
            .map_err(|err| format!("stored username is invalid: {err}"))?;
        Ok(Self::new(
            UserId::new(row.id),
            username,
            row.password_hash,
        ))
    }
}

/// Insert model for a freshly registered user; `created_at` defaults in SQL.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub password_hash: &'a str,
}

impl<'a> From<&'a UserRecord> for NewUserRow<'a> {
    fn from(record: &'a UserRecord) -> Self {
        Self {
            id: *record.id().as_uuid(),
            username: record.username().as_str(),
            password_hash: record.password_hash(),
        }
    }
}
