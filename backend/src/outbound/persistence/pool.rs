//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async` and `bb8` so the persistence adapters check out
//! connections without blocking the runtime. The pool is built without
//! touching the server; connections are established lazily on first checkout,
//! which lets the HTTP server come up while the database is still starting.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const MAX_POOL_SIZE: u32 = 10;
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failed to check out a connection from the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to get connection from pool: {message}")]
pub struct PoolError {
    message: String,
}

impl PoolError {
    pub(crate) fn checkout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shared PostgreSQL pool handed to the persistence adapters.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool for the given database URL.
    ///
    /// The URL is not dialled here; an unreachable server surfaces as a
    /// [`PoolError`] on checkout instead.
    #[must_use]
    pub fn new(database_url: &str) -> Self {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let inner = Pool::builder()
            .max_size(MAX_POOL_SIZE)
            .connection_timeout(CHECKOUT_TIMEOUT)
            .build_unchecked(manager);

        Self { inner }
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] if a connection cannot be obtained within the
    /// checkout timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
