//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_service;
mod device_relay;
mod user_repository;

pub use credential_service::CredentialService;
pub use device_relay::{DeviceRelay, DeviceRelayError, DeviceState};
pub use user_repository::{UserPersistenceError, UserRepository};
