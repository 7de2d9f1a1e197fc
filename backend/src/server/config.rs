//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use lockpanel_backend::outbound::persistence::DbPool;
use url::Url;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) device_base: Url,
    pub(crate) device_timeout: Duration,
}

impl ServerConfig {
    /// Construct a server configuration from application preferences.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        db_pool: DbPool,
        device_base: Url,
        device_timeout: Duration,
    ) -> Self {
        Self {
            bind_addr,
            db_pool,
            device_base,
            device_timeout,
        }
    }
}
