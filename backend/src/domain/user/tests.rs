//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn alice() -> User {
    User::try_from_parts(1, "alice", "a@example.com", "Alice A", false).expect("valid user")
}

#[rstest]
fn username_rejects_empty_input() {
    assert_eq!(Username::new(""), Err(UserValidationError::EmptyUsername));
}

#[rstest]
#[case("alice")]
#[case("Alice.B-2")]
#[case("has inner space")]
#[case("bob ")]
#[case(" alice\t")]
fn username_accepts_valid_input(#[case] raw: &str) {
    let username = Username::new(raw).expect("valid username");
    assert_eq!(username.as_ref(), raw);
}

#[rstest]
fn accessors_expose_stored_fields(alice: User) {
    assert_eq!(alice.id(), UserId::new(1));
    assert_eq!(alice.username().as_ref(), "alice");
    assert_eq!(alice.email(), "a@example.com");
    assert_eq!(alice.full_name(), "Alice A");
    assert!(!alice.is_admin());
}

#[rstest]
fn serialises_in_camel_case(alice: User) {
    let value = serde_json::to_value(&alice).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": 1,
            "username": "alice",
            "email": "a@example.com",
            "fullName": "Alice A",
            "admin": false,
        })
    );
}

#[rstest]
#[case(json!({"id": 7, "username": "root", "email": "r@example.com", "fullName": "Root", "admin": true}))]
#[case(json!({"id": 7, "username": "root", "email": "r@example.com", "full_name": "Root", "admin": true}))]
fn deserialises_either_full_name_spelling(#[case] payload: serde_json::Value) {
    let user: User = serde_json::from_value(payload).expect("valid payload");
    assert_eq!(user.full_name(), "Root");
    assert!(user.is_admin());
}

#[rstest]
fn deserialising_defaults_admin_to_false() {
    let user: User = serde_json::from_value(json!({
        "id": 3,
        "username": "bob",
        "email": "b@example.com",
        "fullName": "Bob B",
    }))
    .expect("admin is optional");
    assert!(!user.is_admin());
}

#[rstest]
fn deserialising_rejects_empty_username() {
    let result = serde_json::from_value::<User>(json!({
        "id": 3,
        "username": "",
        "email": "b@example.com",
        "fullName": "Bob B",
    }));
    assert!(result.is_err());
}

#[rstest]
fn deserialising_rejects_unknown_fields() {
    let result = serde_json::from_value::<User>(json!({
        "id": 3,
        "username": "bob",
        "email": "b@example.com",
        "fullName": "Bob B",
        "password": "hunter2",
    }));
    assert!(result.is_err());
}
