//! Driving port for the register/login use-cases.
//!
//! Inbound adapters call this port to manage credentials without knowing (or
//! importing) the backing infrastructure, which keeps HTTP handler tests
//! deterministic: they substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::credentials::Credentials;
use crate::domain::error::Error;
use crate::domain::user::UserId;

/// Domain use-case port for credential management.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Store a new user; fails with a conflict when the username is taken.
    async fn register(&self, credentials: &Credentials) -> Result<UserId, Error>;

    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown usernames and wrong passwords must be indistinguishable to the
    /// caller.
    async fn login(&self, credentials: &Credentials) -> Result<UserId, Error>;
}
