//! Connect error envelope for domain errors.
//!
//! Keeps the domain error type HTTP agnostic while letting Actix handlers
//! return it directly. Bodies follow the Connect unary error shape
//! `{"code": "...", "message": "..."}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire body of a Connect error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectErrorBody {
    pub code: String,
    pub message: String,
}

impl From<&Error> for ConnectErrorBody {
    fn from(error: &Error) -> Self {
        let redacted = error.redacted();
        Self {
            code: redacted.code().as_str().to_owned(),
            message: redacted.message().to_owned(),
        }
    }
}

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }

        builder.json(ConnectErrorBody::from(self))
    }
}

#[cfg(test)]
mod tests;
