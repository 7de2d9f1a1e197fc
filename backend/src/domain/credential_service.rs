//! Credential service over a user repository and Argon2 hashing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::credentials::Credentials;
use crate::domain::error::Error;
use crate::domain::password::CredentialHasher;
use crate::domain::ports::{CredentialService, UserPersistenceError, UserRepository};
use crate::domain::user::{UserId, UserRecord};

/// Register/login use-case implementation.
///
/// Duplicate detection relies on the repository's unique-username contract
/// rather than a lookup-then-insert pair, so concurrent registrations of the
/// same name cannot both succeed.
#[derive(Clone)]
pub struct CredentialServiceImpl {
    repository: Arc<dyn UserRepository>,
    hasher: CredentialHasher,
}

impl CredentialServiceImpl {
    /// Create a service backed by the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            hasher: CredentialHasher::default(),
        }
    }
}

/// The one auth failure value: unknown-user and wrong-password login attempts
/// must be indistinguishable to block user enumeration.
fn invalid_credentials() -> Error {
    Error::unauthorized("Invalid credentials.")
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::DuplicateUsername => Error::conflict("Username already exists."),
    }
}

#[async_trait]
impl CredentialService for CredentialServiceImpl {
    async fn register(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let password_hash = self
            .hasher
            .hash(credentials.password())
            .map_err(|err| Error::internal(err.to_string()))?;
        let record = UserRecord::new(
            UserId::random(),
            credentials.username().clone(),
            password_hash,
        );

        self.repository
            .insert(&record)
            .await
            .map_err(map_persistence_error)?;
        Ok(record.id())
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let record = self
            .repository
            .find_by_username(credentials.username())
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(invalid_credentials)?;

        let matches = self
            .hasher
            .verify(credentials.password(), record.password_hash())
            .map_err(|err| Error::internal(err.to_string()))?;
        if matches {
            Ok(record.id())
        } else {
            Err(invalid_credentials())
        }
    }
}
