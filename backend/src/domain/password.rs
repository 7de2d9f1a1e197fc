//! Argon2id password hashing behind a small, clonable helper.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};

/// Failure while hashing or verifying a password.
///
/// These indicate malformed stored hashes or parameter problems, never a
/// simple mismatch; mismatches are reported as `Ok(false)` by
/// [`CredentialHasher::verify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("password hashing failed: {message}")]
pub struct PasswordHashingError {
    message: String,
}

impl PasswordHashingError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Hashes and verifies passwords using Argon2id with default parameters,
/// producing PHC-format strings with a per-password random salt.
#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Hash a password into a PHC-format string.
    pub fn hash(&self, password: &str) -> Result<String, PasswordHashingError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| PasswordHashingError::new(err.to_string()))
    }

    /// Check a password against a stored PHC-format hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for unreadable
    /// stored hashes.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordHashingError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|err| PasswordHashingError::new(err.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashingError::new(err.to_string())),
        }
    }
}
