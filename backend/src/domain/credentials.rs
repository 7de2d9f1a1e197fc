//! Credential primitives shared by the register and login flows.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{Username, UsernameValidationError};

/// Domain error returned when a credential payload is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Username exceeded the storage limit.
    UsernameTooLong { max: usize },
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UsernameValidationError> for CredentialsValidationError {
    fn from(value: UsernameValidationError) -> Self {
        match value {
            UsernameValidationError::Empty => Self::EmptyUsername,
            UsernameValidationError::TooLong { max } => Self::UsernameTooLong { max },
        }
    }
}

/// Validated username/password pair used by the credential service.
///
/// ## Invariants
/// - `username` satisfies the [`Username`] invariants.
/// - `password` is non-empty but retains caller-provided whitespace to avoid
///   surprising credential comparisons; it is zeroised on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = Username::try_new(username)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username suitable for lookups.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
