//! Shared HTTP adapter state.
//!
//! Handlers take this via `actix_web::web::Data` and only depend on the
//! [`UserInfoQuery`] port, so they stay testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::UserInfoQuery;

/// Dependency bundle for Connect handlers.
#[derive(Clone)]
pub struct HttpState {
    pub user_info: Arc<dyn UserInfoQuery>,
    /// Upper bound on one call; a shorter `Connect-Timeout-Ms` wins.
    pub request_timeout: Duration,
}

impl HttpState {
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use user_service::domain::UserLookupService;
    /// use user_service::domain::ports::FixtureUserStore;
    /// use user_service::inbound::http::state::HttpState;
    ///
    /// let service = UserLookupService::new(Arc::new(FixtureUserStore::default()));
    /// let state = HttpState::new(Arc::new(service), Duration::from_secs(5));
    /// assert_eq!(state.request_timeout, Duration::from_secs(5));
    /// ```
    pub fn new(user_info: Arc<dyn UserInfoQuery>, request_timeout: Duration) -> Self {
        Self {
            user_info,
            request_timeout,
        }
    }
}
