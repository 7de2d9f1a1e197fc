//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::user::{UserRecord, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
        /// Insert violated the unique username constraint.
        DuplicateUsername => "username already exists",
    }
}

/// Driven port for the credential store.
///
/// Usernames are unique; adapters must report a duplicate insert as
/// [`UserPersistenceError::DuplicateUsername`] rather than a generic query
/// failure so the service can map it to a conflict.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a freshly registered user record.
    async fn insert(&self, record: &UserRecord) -> Result<(), UserPersistenceError>;

    /// Fetch a user by username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserPersistenceError>;
}
