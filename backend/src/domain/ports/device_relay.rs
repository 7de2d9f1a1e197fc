//! Driving port for the device relay and its error taxonomy.

use async_trait::async_trait;

use crate::domain::device::DeviceCommand;

use super::define_port_error;

define_port_error! {
    /// Failures surfaced by relay adapters.
    pub enum DeviceRelayError {
        /// The device could not be reached at all (connect failure, timeout).
        Transport { message: String } => "device transport failure: {message}",
        /// The device answered with a non-success status; `message` carries
        /// the device's own error text.
        Device { status: u16, message: String } => "device reported failure ({status}): {message}",
        /// The device answered 2xx but the body could not be decoded.
        Decode { message: String } => "device response decode failed: {message}",
    }
}

/// State snapshot reported by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    /// Free-form state string, e.g. `locked` or `unlocked`.
    pub current_state: String,
}

/// Stateless relay towards the lock controller.
///
/// No retries and no command queueing: each call is a single HTTP exchange
/// whose outcome strictly mirrors the device's response.
#[async_trait]
pub trait DeviceRelay: Send + Sync {
    /// Post a lock/unlock command to the device.
    async fn send_command(&self, command: DeviceCommand) -> Result<(), DeviceRelayError>;

    /// Read the device's current state.
    async fn fetch_state(&self) -> Result<DeviceState, DeviceRelayError>;
}
