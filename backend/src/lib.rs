//! `UserService.GetUserInfo` served over gRPC and Connect.
//!
//! - [`domain`]: the user record, the lookup use-case and its ports.
//! - [`outbound`]: PostgreSQL and fixture-file implementations of the store.
//! - [`inbound`]: tonic and actix-web adapters over the lookup port.
//! - [`settings`]: layered process configuration.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod proto;
pub mod settings;

pub use middleware::Trace;
