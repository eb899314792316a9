//! Domain ports for the hexagonal boundary.
//!
//! [`UserStore`] is the driven port implemented by persistence adapters;
//! [`UserInfoQuery`] is the driving port inbound transports call.

mod macros;
pub(crate) use macros::define_port_error;

mod user_info_query;
mod user_store;

#[cfg(test)]
pub use user_info_query::MockUserInfoQuery;
pub use user_info_query::UserInfoQuery;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{FixtureUserStore, UserStore, UserStoreError};
