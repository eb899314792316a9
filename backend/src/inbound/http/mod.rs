//! HTTP inbound adapter: Connect-protocol unary RPCs and health probes.

pub mod connect;
pub mod error;
pub mod health;
pub mod state;

pub use connect::{CONNECT_TIMEOUT_HEADER, get_user_info};
pub use error::{ApiResult, ConnectErrorBody};
