//! Load fixture users from a JSON file.
//!
//! The file holds an array of user objects in the domain's serde shape:
//!
//! ```json
//! [
//!   {"id": 1, "username": "alice", "email": "a@example.com", "fullName": "Alice A", "admin": false}
//! ]
//! ```

use std::path::{Path, PathBuf};

use crate::domain::User;
use crate::domain::ports::FixtureUserStore;

/// Failures reading or parsing a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureFileError {
    /// The file could not be read.
    #[error("failed to read fixture file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid array of users.
    #[error("failed to parse fixture file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse fixture users from JSON text.
pub fn parse_fixture_users(json: &str) -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read `path` and build a [`FixtureUserStore`] from its contents.
pub fn load_fixture_store(path: &Path) -> Result<FixtureUserStore, FixtureFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let users = parse_fixture_users(&contents).map_err(|source| FixtureFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FixtureUserStore::new(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_array_of_users() {
        let users = parse_fixture_users(
            r#"[
                {"id": 1, "username": "alice", "email": "a@example.com", "fullName": "Alice A"},
                {"id": 2, "username": "root", "email": "r@example.com", "full_name": "Root", "admin": true}
            ]"#,
        )
        .expect("valid fixture");

        assert_eq!(users.len(), 2);
        assert!(users.iter().any(User::is_admin));
    }

    #[rstest]
    #[case("{}")]
    #[case(r#"[{"id": -1, "username": "neg", "email": "", "fullName": ""}]"#)]
    #[case(r#"[{"id": 1, "username": "", "email": "", "fullName": ""}]"#)]
    fn rejects_malformed_fixtures(#[case] json: &str) {
        assert!(parse_fixture_users(json).is_err());
    }

    #[rstest]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/not/here.json");
        let err = load_fixture_store(path).expect_err("missing file");
        assert!(matches!(err, FixtureFileError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
