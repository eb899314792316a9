//! Inbound adapters that translate gRPC and Connect requests into calls on the
//! [`UserInfoQuery`](crate::domain::ports::UserInfoQuery) port.
//!
//! Both transports share one service instance and log failures through
//! [`log_rpc_failure`], so a lookup fails the same way whichever wire it
//! arrived on.

pub mod grpc;
pub mod http;

use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode};

/// Procedure name used in logs for `GetUserInfo`.
pub const GET_USER_INFO_PROCEDURE: &str = "/algobowl.user.v1.UserService/GetUserInfo";

/// Record a failed RPC at a level matching its classification.
///
/// Internal failures are logged with their cause; the cause never reaches the
/// client. A missing user is routine and stays at debug.
pub fn log_rpc_failure(procedure: &str, err: &Error) {
    let trace_id = err.trace_id().map(|id| id.to_string());
    match err.code() {
        ErrorCode::NotFound => debug!(
            procedure,
            trace_id = trace_id.as_deref(),
            message = err.message(),
            "rpc target not found"
        ),
        ErrorCode::InternalError => error!(
            procedure,
            trace_id = trace_id.as_deref(),
            message = err.message(),
            cause = err.cause(),
            "rpc failed"
        ),
        _ => warn!(
            procedure,
            trace_id = trace_id.as_deref(),
            code = %err.code(),
            message = err.message(),
            "rpc rejected"
        ),
    }
}
