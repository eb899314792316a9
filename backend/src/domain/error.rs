//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to gRPC
//! statuses or Connect error envelopes.

use std::fmt;

use super::TraceId;

/// Client-visible message used for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The request did not complete before its deadline.
    DeadlineExceeded,
    /// An unexpected failure occurred behind the domain boundary.
    InternalError,
}

impl ErrorCode {
    /// Snake-case identifier used in logs and Connect envelopes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_argument",
            Self::NotFound => "not_found",
            Self::DeadlineExceeded => "deadline_exceeded",
            Self::InternalError => "internal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified failure of a domain operation.
///
/// `message` is safe to show to callers. `cause` carries the underlying
/// failure for server-side logs and is never part of [`Error::redacted`].
/// Constructors capture the [`TraceId`] in scope, if any.
///
/// # Examples
/// ```
/// use user_service::domain::{Error, ErrorCode};
///
/// let err = Error::internal("lookup failed").with_cause("connection refused");
/// assert_eq!(err.code(), ErrorCode::InternalError);
/// assert_eq!(err.cause(), Some("connection refused"));
/// assert!(err.redacted().cause().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    cause: Option<String>,
    trace_id: Option<TraceId>,
}

impl Error {
    /// Create a new error with the current trace identifier attached.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
            trace_id: TraceId::current(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Underlying failure, for logs only.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Trace identifier captured at construction.
    #[must_use]
    pub const fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    /// Attach the underlying failure.
    #[must_use]
    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub const fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Copy of this error that is safe to serialise to a client.
    ///
    /// The cause is always dropped. Internal errors additionally have their
    /// message replaced with [`INTERNAL_ERROR_MESSAGE`].
    #[must_use]
    pub fn redacted(&self) -> Self {
        let message = match self.code {
            ErrorCode::InternalError => INTERNAL_ERROR_MESSAGE.to_owned(),
            _ => self.message.clone(),
        };
        Self {
            code: self.code,
            message,
            cause: None,
            trace_id: self.trace_id,
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::DeadlineExceeded`].
    pub fn deadline_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DeadlineExceeded, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}
