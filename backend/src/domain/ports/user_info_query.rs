//! Driving port for the `GetUserInfo` use-case.
//!
//! Transports (gRPC, Connect) depend on this trait rather than on the lookup
//! service or any persistence type, so handler tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::Error;
use crate::proto::{GetUserInfoRequest, GetUserInfoResponse};

/// Resolve a username into its public user projection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserInfoQuery: Send + Sync {
    /// Look up `request.username` and project the matching user.
    ///
    /// Fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
    /// when no user matches and
    /// [`ErrorCode::InternalError`](crate::domain::ErrorCode::InternalError)
    /// for any storage failure.
    async fn get_user_info(
        &self,
        request: GetUserInfoRequest,
    ) -> Result<GetUserInfoResponse, Error>;
}
