//! PostgreSQL-backed `UserStore` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::User;
use crate::domain::ports::{UserStore, UserStoreError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::UserRow;
use super::pool::DbPool;
use super::schema::users;

/// Rows fetched per lookup: one to answer, one more to detect a duplicate.
const LOOKUP_ROW_LIMIT: i64 = 2;

/// Diesel-backed implementation of the [`UserStore`] port.
///
/// Each call checks out one pooled connection and issues one point query on
/// the unique `username` column.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a store reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Reduce the fetched rows to the single match the username must have.
fn single_match(username: &str, rows: Vec<UserRow>) -> Result<UserRow, UserStoreError> {
    let mut rows = rows.into_iter();
    match (rows.next(), rows.next()) {
        (None, _) => Err(UserStoreError::not_found(username)),
        (Some(row), None) => Ok(row),
        (Some(_), Some(_)) => Err(UserStoreError::duplicate_username(username)),
    }
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn find_by_username(&self, username: &str) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .limit(LOOKUP_ROW_LIMIT)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        single_match(username, rows)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    //! Row-reduction coverage; the query itself needs a live database.
    use super::*;
    use rstest::rstest;

    fn row(id: i64, username: &str) -> UserRow {
        UserRow {
            id,
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            full_name: "Someone".to_owned(),
            admin: false,
        }
    }

    #[rstest]
    fn no_rows_is_not_found() {
        assert_eq!(
            single_match("ghost", Vec::new()).expect_err("no rows"),
            UserStoreError::not_found("ghost")
        );
    }

    #[rstest]
    fn one_row_is_returned() {
        let found = single_match("alice", vec![row(1, "alice")]).expect("one row");
        assert_eq!(found.id, 1);
    }

    #[rstest]
    fn two_rows_violate_uniqueness() {
        assert_eq!(
            single_match("dup", vec![row(1, "dup"), row(2, "dup")]).expect_err("two rows"),
            UserStoreError::duplicate_username("dup")
        );
    }
}
