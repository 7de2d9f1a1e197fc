//! Stub ports and state builders shared by handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::web;
use async_trait::async_trait;

use crate::domain::ports::{
    CredentialService, DeviceRelay, DeviceRelayError, DeviceState,
};
use crate::domain::{Credentials, Error, UserId};
use crate::inbound::http::state::HttpState;

/// Credential service double returning one preconfigured outcome.
pub struct StubCredentialService {
    outcome: Result<UserId, Error>,
}

impl StubCredentialService {
    pub fn succeeding(user_id: UserId) -> Self {
        Self {
            outcome: Ok(user_id),
        }
    }

    pub fn failing(error: Error) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl CredentialService for StubCredentialService {
    async fn register(&self, _credentials: &Credentials) -> Result<UserId, Error> {
        self.outcome.clone()
    }

    async fn login(&self, _credentials: &Credentials) -> Result<UserId, Error> {
        self.outcome.clone()
    }
}

enum RelayBehaviour {
    Acknowledge,
    Fail(DeviceRelayError),
    Report(DeviceState),
}

/// Device relay double counting calls and returning one preconfigured outcome.
pub struct StubDeviceRelay {
    behaviour: RelayBehaviour,
    calls: Arc<AtomicUsize>,
}

impl StubDeviceRelay {
    pub fn acknowledging() -> Self {
        Self {
            behaviour: RelayBehaviour::Acknowledge,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: DeviceRelayError) -> Self {
        Self {
            behaviour: RelayBehaviour::Fail(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn reporting(state: DeviceState) -> Self {
        Self {
            behaviour: RelayBehaviour::Report(state),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, usable after the stub moves into the app.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl DeviceRelay for StubDeviceRelay {
    async fn send_command(
        &self,
        _command: crate::domain::DeviceCommand,
    ) -> Result<(), DeviceRelayError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.behaviour {
            RelayBehaviour::Fail(error) => Err(error.clone()),
            _ => Ok(()),
        }
    }

    async fn fetch_state(&self) -> Result<DeviceState, DeviceRelayError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.behaviour {
            RelayBehaviour::Report(state) => Ok(state.clone()),
            RelayBehaviour::Fail(error) => Err(error.clone()),
            RelayBehaviour::Acknowledge => Ok(DeviceState {
                current_state: "locked".to_owned(),
            }),
        }
    }
}

/// State for auth handler tests; the relay is never called there.
pub fn test_state(credentials: StubCredentialService) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(credentials),
        Arc::new(StubDeviceRelay::acknowledging()),
    ))
}

/// State for control handler tests; the credential service is never called
/// there.
pub fn relay_test_state(relay: StubDeviceRelay) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(StubCredentialService::failing(Error::internal(
            "credential service not expected in this test",
        ))),
        Arc::new(relay),
    ))
}
