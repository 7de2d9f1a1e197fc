//! Startup readiness loop for the credential store.
//!
//! The store is the one dependency the service cannot serve credentials
//! without, so the bootstrap retries on a fixed delay indefinitely: no
//! backoff, no cap. Each attempt first applies pending migrations over a
//! blocking connection, then checks a connection out of the shared pool. The
//! HTTP server runs throughout; only the readiness probe waits on this loop.

use std::time::Duration;

use diesel::{Connection, PgConnection};
use diesel_migrations::MigrationHarness;
use tracing::{info, warn};

use super::MIGRATIONS;
use super::pool::DbPool;

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Block until the database accepts connections, retrying every five seconds.
pub async fn await_store_ready(database_url: &str, pool: &DbPool) {
    loop {
        match attempt(database_url, pool).await {
            Ok(()) => {
                info!("database connected");
                return;
            }
            Err(message) => {
                warn!(
                    error = %message,
                    delay_seconds = RETRY_DELAY.as_secs(),
                    "database connection failed; retrying"
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}

async fn attempt(database_url: &str, pool: &DbPool) -> Result<(), String> {
    run_migrations(database_url).await?;
    pool.get().await.map(|_| ()).map_err(|err| err.to_string())
}

/// Migrations run over a synchronous connection on the blocking pool; the
/// async pool stays untouched until the schema is in place.
async fn run_migrations(database_url: &str) -> Result<(), String> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url).map_err(|err| err.to_string())?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|err| err.to_string())
    })
    .await
    .map_err(|err| err.to_string())?
}
