//! Generate tonic client and server stubs for `algobowl.user.v1.UserService`.
//!
//! Messages are hand-written `prost` derives in `src/proto.rs` that mirror
//! `proto/algobowl/user/v1/user.proto`; only the service plumbing is
//! generated here, so the build does not need `protoc`.

fn main() {
    let get_user_info = tonic_build::manual::Method::builder()
        .name("get_user_info")
        .route_name("GetUserInfo")
        .input_type("crate::proto::GetUserInfoRequest")
        .output_type("crate::proto::GetUserInfoResponse")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let service = tonic_build::manual::Service::builder()
        .name("UserService")
        .package("algobowl.user.v1")
        .method(get_user_info)
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=proto/algobowl/user/v1/user.proto");
}
