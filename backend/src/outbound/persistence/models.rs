//! Internal Diesel row structs.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::ports::UserStoreError;
use crate::domain::{User, UserId, Username};

use super::schema::users;

/// Row struct for reading from the `"user"` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub admin: bool,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = u64::try_from(row.id)
            .map_err(|_| UserStoreError::query(format!("user row has negative id {}", row.id)))?;
        let username = Username::new(row.username).map_err(|err| {
            UserStoreError::query(format!("user row {id} has invalid username: {err}"))
        })?;
        Ok(Self::new(
            UserId::new(id),
            username,
            row.email,
            row.full_name,
            row.admin,
        ))
    }
}
