//! User identity and stored credential record.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors raised by [`Username::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidationError {
    Empty,
    TooLong { max: usize },
}

impl fmt::Display for UsernameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username must not be empty"),
            Self::TooLong { max } => write!(f, "username must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UsernameValidationError {}

/// Maximum accepted username length.
pub const USERNAME_MAX: usize = 255;

/// Unique account name chosen at registration.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and non-empty after trimming.
/// - At most [`USERNAME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from raw input.
    pub fn try_new(raw: &str) -> Result<Self, UsernameValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(UsernameValidationError::TooLong { max: USERNAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Username string suitable for lookups and storage.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

/// Stable user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier for a freshly registered user.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted credential record: one per username.
///
/// Created on register, read on login, never mutated. The password hash is a
/// PHC-format string and is never serialised towards clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: UserId,
    username: Username,
    password_hash: String,
}

impl UserRecord {
    /// Assemble a record from its parts.
    pub fn new(id: UserId, username: Username, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    /// Stable identifier for this user.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The unique account name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// The stored PHC-format password hash.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_usernames_are_rejected(#[case] raw: &str) {
        let err = Username::try_new(raw).expect_err("blank username must fail");
        assert_eq!(err, UsernameValidationError::Empty);
    }

    #[test]
    fn overlong_usernames_are_rejected() {
        let raw = "a".repeat(USERNAME_MAX + 1);
        let err = Username::try_new(&raw).expect_err("overlong username must fail");
        assert_eq!(err, UsernameValidationError::TooLong { max: USERNAME_MAX });
    }

    #[test]
    fn usernames_are_trimmed() {
        let username = Username::try_new("  door@example.com  ").expect("valid username");
        assert_eq!(username.as_str(), "door@example.com");
    }

    #[test]
    fn user_id_serialises_as_bare_uuid() {
        let id = UserId::random();
        let value = serde_json::to_value(id).expect("id serialises");
        assert_eq!(value, serde_json::json!(id.as_uuid().to_string()));
    }
}
