//! Reqwest-backed device relay adapter.
//!
//! This adapter owns transport details only: request serialisation, the
//! request timeout, HTTP status mapping, and JSON decoding of device bodies.
//! The device contract comes from the lock controller: commands are posted to
//! `<base>/control`, state is read from `<base>/state`, and failure bodies
//! carry an `error` string.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::domain::DeviceCommand;
use crate::domain::ports::{DeviceRelay, DeviceRelayError, DeviceState};

/// Message used when a failing device body carries no `error` field.
const FALLBACK_FAILURE_MESSAGE: &str = "Failed to send command";

/// Failures constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum RelayBuildError {
    /// The HTTP client could not be constructed.
    #[error("failed to build relay HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The device base URL cannot host the control/state paths.
    #[error("invalid device base URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Serialize)]
struct CommandBody {
    command: DeviceCommand,
}

#[derive(Deserialize)]
struct StateBody {
    current_state: String,
}

/// Relay adapter performing one HTTP exchange per command against a fixed
/// device address.
pub struct HttpDeviceRelay {
    client: Client,
    control_url: Url,
    state_url: Url,
}

impl HttpDeviceRelay {
    /// Build an adapter for the given device base URL with an explicit
    /// request timeout. Path segments `control` and `state` are appended to
    /// the base.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL cannot be extended.
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, RelayBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base = ensure_trailing_slash(base)?;
        Ok(Self {
            client,
            control_url: base.join("control")?,
            state_url: base.join("state")?,
        })
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn ensure_trailing_slash(base: &Url) -> Result<Url, url::ParseError> {
    if base.path().ends_with('/') {
        Ok(base.clone())
    } else {
        Url::parse(&format!("{base}/"))
    }
}

#[async_trait]
impl DeviceRelay for HttpDeviceRelay {
    async fn send_command(&self, command: DeviceCommand) -> Result<(), DeviceRelayError> {
        let response = self
            .client
            .post(self.control_url.clone())
            .json(&CommandBody { command })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status.is_success() {
            Ok(())
        } else {
            Err(map_status_error(status, body.as_ref()))
        }
    }

    async fn fetch_state(&self) -> Result<DeviceState, DeviceRelayError> {
        let response = self
            .client
            .get(self.state_url.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status.is_success() {
            parse_state(body.as_ref())
        } else {
            Err(map_status_error(status, body.as_ref()))
        }
    }
}

fn parse_state(body: &[u8]) -> Result<DeviceState, DeviceRelayError> {
    let decoded: StateBody = serde_json::from_slice(body).map_err(|error| {
        DeviceRelayError::decode(format!("invalid device state payload: {error}"))
    })?;
    Ok(DeviceState {
        current_state: decoded.current_state,
    })
}

fn map_transport_error(error: reqwest::Error) -> DeviceRelayError {
    DeviceRelayError::transport(error.to_string())
}

/// Surface the device's own error text when it sent one; the relay never
/// invents device messages beyond the fallback.
fn map_status_error(status: StatusCode, body: &[u8]) -> DeviceRelayError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_owned());
    DeviceRelayError::device(status.as_u16(), message)
}
