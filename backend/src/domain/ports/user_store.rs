//! Driven port for user record lookups and its in-memory fixture.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Outcomes other than "found" reported by user store adapters.
    ///
    /// `NotFound` is an expected result. Every other variant is a storage
    /// failure whose fields are meant for server-side logs only.
    pub enum UserStoreError {
        /// No persisted user has the requested username.
        NotFound { username: String } => "no user with username {username:?}",
        /// The backing store could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// The lookup failed or returned data that violates the user model.
        Query { message: String } => "user store query failed: {message}",
        /// More than one record matched a username that must be unique.
        DuplicateUsername { username: String } => "username {username:?} matched more than one user",
    }
}

impl UserStoreError {
    /// Whether this is the expected "no such user" outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Keyed lookup of persisted users.
///
/// Implementations issue at most one read per call and never retry or cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the user whose username equals `username` exactly.
    async fn find_by_username(&self, username: &str) -> Result<User, UserStoreError>;
}

/// In-memory store used for tests and for running without a database.
///
/// Records are kept as given, duplicates included, so a violated uniqueness
/// constraint can be reproduced.
#[derive(Debug, Default, Clone)]
pub struct FixtureUserStore {
    users: Vec<User>,
}

impl FixtureUserStore {
    /// Store holding exactly `users`.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for FixtureUserStore {
    async fn find_by_username(&self, username: &str) -> Result<User, UserStoreError> {
        let mut matches = self
            .users
            .iter()
            .filter(|user| user.username().as_ref() == username);

        match (matches.next(), matches.next()) {
            (None, _) => Err(UserStoreError::not_found(username)),
            (Some(user), None) => Ok(user.clone()),
            (Some(_), Some(_)) => Err(UserStoreError::duplicate_username(username)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the fixture store contract.
    use super::*;
    use rstest::{fixture, rstest};

    fn user(id: u64, username: &str) -> User {
        User::try_from_parts(id, username, format!("{username}@example.com"), "Test User", false)
            .expect("valid user")
    }

    #[fixture]
    fn store() -> FixtureUserStore {
        FixtureUserStore::new(vec![user(1, "alice"), user(2, "bob"), user(3, "dup"), user(4, "dup")])
    }

    #[rstest]
    #[tokio::test]
    async fn finds_exact_match(store: FixtureUserStore) {
        let found = store.find_by_username("bob").await.expect("bob exists");
        assert_eq!(found.id().get(), 2);
    }

    #[rstest]
    #[case("ghost")]
    #[case("")]
    #[case("Alice")]
    #[case(" alice")]
    #[tokio::test]
    async fn non_matching_usernames_are_not_found(store: FixtureUserStore, #[case] username: &str) {
        let err = store
            .find_by_username(username)
            .await
            .expect_err("no exact match");
        assert_eq!(err, UserStoreError::not_found(username));
        assert!(err.is_not_found());
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_usernames_are_a_storage_error(store: FixtureUserStore) {
        let err = store.find_by_username("dup").await.expect_err("ambiguous");
        assert_eq!(err, UserStoreError::duplicate_username("dup"));
        assert!(!err.is_not_found());
    }

    #[rstest]
    fn reports_size(store: FixtureUserStore) {
        assert_eq!(store.len(), 4);
        assert!(FixtureUserStore::default().is_empty());
    }

    #[rstest]
    #[case(UserStoreError::connection("refused"), "user store connection failed: refused")]
    #[case(UserStoreError::query("bad row"), "user store query failed: bad row")]
    #[case(UserStoreError::not_found("ghost"), "no user with username \"ghost\"")]
    #[case(
        UserStoreError::duplicate_username("dup"),
        "username \"dup\" matched more than one user"
    )]
    fn errors_render_their_fields(#[case] err: UserStoreError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
