//! Tests for the Connect error envelope.

use super::*;
use crate::domain::{INTERNAL_ERROR_MESSAGE, TraceId};
use actix_web::body::to_bytes;
use rstest::rstest;

async fn body_of(response: HttpResponse) -> ConnectErrorBody {
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    serde_json::from_slice(&bytes).expect("connect error json")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::deadline_exceeded("slow"), StatusCode::GATEWAY_TIMEOUT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[actix_web::test]
async fn not_found_envelope_keeps_message() {
    let response = Error::not_found("user not found").error_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_of(response).await,
        ConnectErrorBody {
            code: "not_found".into(),
            message: "user not found".into(),
        }
    );
}

#[actix_web::test]
async fn internal_envelope_is_redacted() {
    let error = Error::internal("select from \"user\" failed").with_cause("relation missing");

    let body = body_of(error.error_response()).await;

    assert_eq!(body.code, "internal");
    assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
}

#[actix_web::test]
async fn trace_id_is_echoed_as_header() {
    let trace_id = TraceId::generate();
    let response = Error::internal("boom")
        .with_trace_id(trace_id)
        .error_response();

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("ascii header");
    assert_eq!(header, trace_id.to_string());
}

#[rstest]
fn no_trace_header_without_trace_id() {
    let response = Error::not_found("missing").error_response();
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}
