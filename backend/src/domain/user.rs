//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned when assembling a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique login name of a persisted user.
///
/// Persisted usernames are non-empty and otherwise kept byte for byte,
/// surrounding whitespace included. Lookups never construct one of these:
/// request usernames are matched verbatim, so an empty request finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is assigned by the store and never reused.
/// - `username` is unique across the store and non-empty.
///
/// Serialises in camelCase (`fullName`); `full_name` is accepted as an alias
/// so fixture files may use either spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    username: Username,
    email: String,
    #[serde(alias = "full_name")]
    full_name: String,
    #[serde(default)]
    admin: bool,
}

impl User {
    /// Assemble a user from validated parts.
    #[must_use]
    pub fn new(
        id: UserId,
        username: Username,
        email: impl Into<String>,
        full_name: impl Into<String>,
        admin: bool,
    ) -> Self {
        Self {
            id,
            username,
            email: email.into(),
            full_name: full_name.into(),
            admin,
        }
    }

    /// Fallible constructor taking the username as a plain string.
    pub fn try_from_parts(
        id: u64,
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
        admin: bool,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id),
            Username::new(username)?,
            email,
            full_name,
            admin,
        ))
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Full name as stored; exposed to clients as the display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// Whether the user holds administrator rights.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }
}

#[cfg(test)]
mod tests;
