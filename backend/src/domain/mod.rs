//! Domain primitives, ports and the user lookup use-case.
//!
//! Public surface:
//! - `User`, `UserId`, `Username`: the persisted user record.
//! - `Error`, `ErrorCode`: transport-agnostic classified failures.
//! - `TraceId`: request-scoped correlation identifier.
//! - `UserLookupService`: implementation of `ports::UserInfoQuery`.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_lookup_service;

pub use self::error::{Error, ErrorCode, INTERNAL_ERROR_MESSAGE};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_lookup_service::{USER_NOT_FOUND_MESSAGE, UserLookupService};
