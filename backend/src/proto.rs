//! Protobuf messages and generated service stubs for `algobowl.user.v1`.
//!
//! The message structs mirror `proto/algobowl/user/v1/user.proto` field for
//! field. `build.rs` generates the `user_service_server` and
//! `user_service_client` modules that reference them.

/// Public projection of a persisted user.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct User {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(string, tag = "2")]
    pub username: String,
    #[prost(string, tag = "3")]
    pub email: String,
    #[prost(string, tag = "4")]
    pub display_name: String,
    #[prost(bool, tag = "5")]
    pub is_admin: bool,
}

/// Request for `UserService.GetUserInfo`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct GetUserInfoRequest {
    #[prost(string, tag = "1")]
    pub username: String,
}

/// Response for `UserService.GetUserInfo`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct GetUserInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
}

#[allow(
    clippy::pedantic,
    clippy::allow_attributes_without_reason,
    reason = "generated tonic service code is not held to workspace style"
)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/algobowl.user.v1.UserService.rs"));
}

pub use generated::{user_service_client, user_service_server};
