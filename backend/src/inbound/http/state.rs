//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CredentialService, DeviceRelay};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub credentials: Arc<dyn CredentialService>,
    pub relay: Arc<dyn DeviceRelay>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    pub fn new(credentials: Arc<dyn CredentialService>, relay: Arc<dyn DeviceRelay>) -> Self {
        Self { credentials, relay }
    }
}
