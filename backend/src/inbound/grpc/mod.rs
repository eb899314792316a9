//! gRPC inbound adapter serving `algobowl.user.v1.UserService` with `tonic`.

pub mod user_service;

pub use user_service::{GrpcUserService, grpc_user_service, status_from_error};
