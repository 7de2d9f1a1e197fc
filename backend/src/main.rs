//! Backend entry-point: wires the auth endpoints, the device control relay,
//! and health probes.

mod server;

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use lockpanel_backend::inbound::http::health::HealthState;
use lockpanel_backend::outbound::persistence::{DbPool, await_store_ready};
use server::ServerConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/lockpanel";
const DEFAULT_DEVICE_URL: &str = "http://192.168.18.87:5001";
const DEFAULT_DEVICE_TIMEOUT_SECS: u64 = 10;

/// Parse the relay timeout: absent means the default, malformed refuses to
/// start rather than silently running with the default.
fn device_timeout_secs(raw: Option<String>) -> std::io::Result<u64> {
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|e| std::io::Error::other(format!("invalid DEVICE_TIMEOUT_SECS: {e}"))),
        None => Ok(DEFAULT_DEVICE_TIMEOUT_SECS),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

    let device_base = env::var("DEVICE_CONTROL_URL").unwrap_or_else(|_| DEFAULT_DEVICE_URL.into());
    let device_base = Url::parse(&device_base)
        .map_err(|e| std::io::Error::other(format!("invalid DEVICE_CONTROL_URL: {e}")))?;

    let device_timeout = device_timeout_secs(env::var("DEVICE_TIMEOUT_SECS").ok())?;

    let db_pool = DbPool::new(&database_url);
    let health_state = web::Data::new(HealthState::new());
    let server = server::build(
        ServerConfig::new(
            bind_addr,
            db_pool.clone(),
            device_base,
            Duration::from_secs(device_timeout),
        ),
        health_state.clone(),
    )?;

    // The server binds before the credential store is up: probes answer
    // immediately, and readiness flips once migrations ran and a connection
    // checks out (fixed-delay retry, no cap).
    tokio::spawn(async move {
        await_store_ready(&database_url, &db_pool).await;
        health_state.mark_ready();
    });

    server.await
}
