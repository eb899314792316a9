//! `GetUserInfo` use-case: resolve a username through the [`UserStore`] and
//! project the record into its public RPC shape.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserInfoQuery, UserStore, UserStoreError};
use crate::domain::{Error, User};
use crate::proto;

/// Client-visible message for a missing user.
pub const USER_NOT_FOUND_MESSAGE: &str = "user not found";

/// Lookup service backing `UserService.GetUserInfo`.
///
/// Holds its store by injection; performs exactly one store read per call and
/// no logging of its own.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_service::domain::ports::{FixtureUserStore, UserInfoQuery};
/// use user_service::domain::{User, UserLookupService};
/// use user_service::proto::GetUserInfoRequest;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let alice = User::try_from_parts(1, "alice", "a@example.com", "Alice A", false).unwrap();
/// let service = UserLookupService::new(Arc::new(FixtureUserStore::new(vec![alice])));
///
/// let response = service
///     .get_user_info(GetUserInfoRequest { username: "alice".into() })
///     .await
///     .unwrap();
/// assert_eq!(response.user.unwrap().display_name, "Alice A");
/// # });
/// ```
#[derive(Clone)]
pub struct UserLookupService {
    store: Arc<dyn UserStore>,
}

impl UserLookupService {
    /// Create a service reading from `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

impl From<User> for proto::User {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            username: user.username().as_ref().to_owned(),
            email: user.email().to_owned(),
            display_name: user.full_name().to_owned(),
            is_admin: user.is_admin(),
        }
    }
}

/// Classify a store outcome. Only `NotFound` escapes as anything other than
/// an internal error; the store error itself is kept as the cause.
fn map_store_error(error: UserStoreError) -> Error {
    let classified = match &error {
        UserStoreError::NotFound { .. } => Error::not_found(USER_NOT_FOUND_MESSAGE),
        UserStoreError::Connection { .. }
        | UserStoreError::Query { .. }
        | UserStoreError::DuplicateUsername { .. } => Error::internal("user lookup failed"),
    };
    classified.with_cause(error)
}

#[async_trait]
impl UserInfoQuery for UserLookupService {
    async fn get_user_info(
        &self,
        request: proto::GetUserInfoRequest,
    ) -> Result<proto::GetUserInfoResponse, Error> {
        let user = self
            .store
            .find_by_username(&request.username)
            .await
            .map_err(map_store_error)?;

        Ok(proto::GetUserInfoResponse {
            user: Some(user.into()),
        })
    }
}
