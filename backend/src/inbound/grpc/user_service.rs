//! `UserService` gRPC handler.
//!
//! Scopes a fresh [`TraceId`] around each call, delegates to the
//! [`UserInfoQuery`] port and maps domain errors to `tonic::Status` codes.
//! The trace identifier is returned as `trace-id` metadata on both successful
//! responses and errors.

use std::sync::Arc;

use tonic::metadata::{AsciiMetadataValue, MetadataMap};
use tonic::{Code, Request, Response, Status};
use tracing::warn;

use crate::domain::ports::UserInfoQuery;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER, TraceId};
use crate::inbound::{GET_USER_INFO_PROCEDURE, log_rpc_failure};
use crate::proto::user_service_server::{UserService, UserServiceServer};
use crate::proto::{GetUserInfoRequest, GetUserInfoResponse};

/// gRPC front for the user lookup port.
#[derive(Clone)]
pub struct GrpcUserService {
    query: Arc<dyn UserInfoQuery>,
}

impl GrpcUserService {
    pub fn new(query: Arc<dyn UserInfoQuery>) -> Self {
        Self { query }
    }
}

/// Wrap `query` in the generated tonic server, ready to add to a router.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_service::domain::UserLookupService;
/// use user_service::domain::ports::FixtureUserStore;
/// use user_service::inbound::grpc::grpc_user_service;
///
/// let service = UserLookupService::new(Arc::new(FixtureUserStore::default()));
/// let _server = grpc_user_service(Arc::new(service));
/// ```
pub fn grpc_user_service(query: Arc<dyn UserInfoQuery>) -> UserServiceServer<GrpcUserService> {
    UserServiceServer::new(GrpcUserService::new(query))
}

const fn grpc_code(code: ErrorCode) -> Code {
    match code {
        ErrorCode::InvalidRequest => Code::InvalidArgument,
        ErrorCode::NotFound => Code::NotFound,
        ErrorCode::DeadlineExceeded => Code::DeadlineExceeded,
        ErrorCode::InternalError => Code::Internal,
    }
}

fn insert_trace_id(metadata: &mut MetadataMap, trace_id: TraceId) {
    match trace_id.to_string().parse::<AsciiMetadataValue>() {
        Ok(value) => {
            metadata.insert(TRACE_ID_HEADER, value);
        }
        Err(error) => {
            warn!(%error, %trace_id, "failed to encode trace identifier metadata");
        }
    }
}

/// Client-facing status for a domain error. Internal detail is redacted.
pub fn status_from_error(err: &Error) -> Status {
    let redacted = err.redacted();
    let mut status = Status::new(grpc_code(redacted.code()), redacted.message());
    if let Some(trace_id) = redacted.trace_id() {
        insert_trace_id(status.metadata_mut(), trace_id);
    }
    status
}

#[tonic::async_trait]
impl UserService for GrpcUserService {
    async fn get_user_info(
        &self,
        request: Request<GetUserInfoRequest>,
    ) -> Result<Response<GetUserInfoResponse>, Status> {
        let trace_id = TraceId::generate();
        let query = Arc::clone(&self.query);

        TraceId::scope(trace_id, async move {
            match query.get_user_info(request.into_inner()).await {
                Ok(body) => {
                    let mut response = Response::new(body);
                    insert_trace_id(response.metadata_mut(), trace_id);
                    Ok(response)
                }
                Err(err) => {
                    let err = err.with_trace_id(trace_id);
                    log_rpc_failure(GET_USER_INFO_PROCEDURE, &err);
                    Err(status_from_error(&err))
                }
            }
        })
        .await
    }
}
