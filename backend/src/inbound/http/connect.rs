//! Connect-protocol unary endpoint for `UserService.GetUserInfo`.
//!
//! Accepts `application/json` (protobuf-JSON mapping) or `application/proto`
//! bodies and answers in the same codec. Failures use the Connect error
//! envelope from [`super::error`]. A `Connect-Timeout-Ms` header can only
//! shorten the configured request timeout.

use std::time::Duration;

use actix_web::http::header::{self, HeaderMap};
use actix_web::{HttpRequest, HttpResponse, post, web};
use prost::Message;
use serde::{Deserialize, Serialize};

use super::error::ApiResult;
use super::state::HttpState;
use crate::domain::Error;
use crate::inbound::{GET_USER_INFO_PROCEDURE, log_rpc_failure};
use crate::proto::{GetUserInfoRequest, GetUserInfoResponse, User};

/// Header carrying the client's deadline in milliseconds.
pub const CONNECT_TIMEOUT_HEADER: &str = "connect-timeout-ms";

const JSON_CONTENT_TYPE: &str = "application/json";
const PROTO_CONTENT_TYPE: &str = "application/proto";
/// Connect limits timeout values to ten digits.
const MAX_TIMEOUT_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Codec {
    Json,
    Proto,
}

impl Codec {
    /// Match the media type, ignoring parameters such as `charset`.
    fn from_content_type(value: Option<&str>) -> Option<Self> {
        let essence = value?.split(';').next()?.trim();
        if essence.eq_ignore_ascii_case(JSON_CONTENT_TYPE) {
            Some(Self::Json)
        } else if essence.eq_ignore_ascii_case(PROTO_CONTENT_TYPE) {
            Some(Self::Proto)
        } else {
            None
        }
    }

    fn decode(self, body: &[u8]) -> ApiResult<GetUserInfoRequest> {
        match self {
            Self::Json => serde_json::from_slice::<GetUserInfoRequestJson>(body)
                .map(Into::into)
                .map_err(|err| Error::invalid_request("malformed JSON request body").with_cause(err)),
            Self::Proto => GetUserInfoRequest::decode(body).map_err(|err| {
                Error::invalid_request("malformed protobuf request body").with_cause(err)
            }),
        }
    }

    fn encode(self, response: &GetUserInfoResponse) -> HttpResponse {
        match self {
            Self::Json => HttpResponse::Ok().json(GetUserInfoResponseJson::from(response)),
            Self::Proto => HttpResponse::Ok()
                .content_type(PROTO_CONTENT_TYPE)
                .body(response.encode_to_vec()),
        }
    }
}

/// Protobuf-JSON request. A missing or `null` username is the empty string.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetUserInfoRequestJson {
    #[serde(default)]
    username: Option<String>,
}

impl From<GetUserInfoRequestJson> for GetUserInfoRequest {
    fn from(value: GetUserInfoRequestJson) -> Self {
        Self {
            username: value.username.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GetUserInfoResponseJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserJson<'a>>,
}

impl<'a> From<&'a GetUserInfoResponse> for GetUserInfoResponseJson<'a> {
    fn from(response: &'a GetUserInfoResponse) -> Self {
        Self {
            user: response.user.as_ref().map(UserJson::from),
        }
    }
}

/// Protobuf-JSON view of [`User`]: camelCase names, `uint64` as a decimal
/// string, default values omitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "is_empty")]
    username: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    email: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    display_name: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    is_admin: bool,
}

impl<'a> From<&'a User> for UserJson<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: (user.id != 0).then(|| user.id.to_string()),
            username: &user.username,
            email: &user.email,
            display_name: &user.display_name,
            is_admin: user.is_admin,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde passes fields by reference")]
fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde passes fields by reference")]
fn is_empty(value: &&str) -> bool {
    value.is_empty()
}

/// The shorter of the configured timeout and the client's header, if any.
fn effective_timeout(headers: &HeaderMap, configured: Duration) -> ApiResult<Duration> {
    let Some(value) = headers.get(CONNECT_TIMEOUT_HEADER) else {
        return Ok(configured);
    };
    let invalid = || Error::invalid_request("invalid Connect-Timeout-Ms header");
    let text = value.to_str().map_err(|_| invalid())?;
    if text.is_empty()
        || text.len() > MAX_TIMEOUT_DIGITS
        || !text.bytes().all(|byte| byte.is_ascii_digit())
    {
        return Err(invalid());
    }
    let millis: u64 = text.parse().map_err(|_| invalid())?;
    Ok(configured.min(Duration::from_millis(millis)))
}

async fn call(
    state: &HttpState,
    codec: Codec,
    headers: &HeaderMap,
    body: &[u8],
) -> ApiResult<GetUserInfoResponse> {
    let request = codec.decode(body)?;
    let deadline = effective_timeout(headers, state.request_timeout)?;
    tokio::time::timeout(deadline, state.user_info.get_user_info(request))
        .await
        .map_err(|_elapsed| Error::deadline_exceeded("request deadline exceeded"))?
}

/// `POST /algobowl.user.v1.UserService/GetUserInfo`.
#[post("/algobowl.user.v1.UserService/GetUserInfo")]
pub async fn get_user_info(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let Some(codec) = Codec::from_content_type(content_type) else {
        return Ok(HttpResponse::UnsupportedMediaType().finish());
    };

    match call(&state, codec, req.headers(), &body).await {
        Ok(response) => Ok(codec.encode(&response)),
        Err(err) => {
            log_rpc_failure(GET_USER_INFO_PROCEDURE, &err);
            Err(err)
        }
    }
}
