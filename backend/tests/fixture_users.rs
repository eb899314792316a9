//! Fixture-file store loading and lookups through the service.

use std::io::Write;
use std::sync::Arc;

use rstest::rstest;
use tempfile::NamedTempFile;

use user_service::domain::ports::UserInfoQuery;
use user_service::domain::{ErrorCode, UserLookupService};
use user_service::outbound::fixture_file::{FixtureFileError, load_fixture_store};
use user_service::proto::GetUserInfoRequest;

fn fixture_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[rstest]
#[tokio::test]
async fn loaded_users_are_served() {
    let file = fixture_file(
        r#"[
            {"id": 1, "username": "alice", "email": "a@example.com", "fullName": "Alice A"},
            {"id": 2, "username": "bob", "email": "b@example.com", "full_name": "Bob B", "admin": true}
        ]"#,
    );
    let store = load_fixture_store(file.path()).expect("fixture loads");
    assert_eq!(store.len(), 2);
    let service = UserLookupService::new(Arc::new(store));

    let bob = service
        .get_user_info(GetUserInfoRequest {
            username: "bob".into(),
        })
        .await
        .expect("bob exists")
        .user
        .expect("user present");
    assert_eq!(bob.display_name, "Bob B");
    assert!(bob.is_admin);

    let missing = service
        .get_user_info(GetUserInfoRequest {
            username: "carol".into(),
        })
        .await
        .expect_err("carol is absent");
    assert_eq!(missing.code(), ErrorCode::NotFound);
}

#[rstest]
fn empty_array_gives_empty_store() {
    let file = fixture_file("[]");

    assert!(load_fixture_store(file.path()).expect("fixture loads").is_empty());
}

#[rstest]
#[case::not_json("users: alice")]
#[case::missing_field(r#"[{"id": 1, "username": "alice"}]"#)]
#[case::blank_username(r#"[{"id": 1, "username": "", "email": "e", "fullName": "n"}]"#)]
#[case::negative_id(r#"[{"id": -1, "username": "a", "email": "e", "fullName": "n"}]"#)]
fn malformed_file_is_a_parse_error(#[case] contents: &str) {
    let file = fixture_file(contents);

    let error = load_fixture_store(file.path()).expect_err("parse fails");

    assert!(matches!(error, FixtureFileError::Parse { .. }));
}

#[rstest]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    let error = load_fixture_store(&path).expect_err("read fails");

    assert!(matches!(error, FixtureFileError::Read { .. }));
    assert!(error.to_string().contains("absent.json"));
}
