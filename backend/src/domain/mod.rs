//! Domain primitives, ports, and use-case services.
//!
//! Purpose: define the strongly typed entities shared by the HTTP adapter and
//! the outbound adapters, and the ports those adapters plug into. Types here
//! are transport agnostic and immutable; each documents its invariants and
//! serde contract in its own Rustdoc.

pub mod credential_service;
pub mod credentials;
pub mod device;
pub mod error;
pub mod password;
pub mod ports;
pub mod user;

pub use self::credential_service::CredentialServiceImpl;
pub use self::credentials::{Credentials, CredentialsValidationError};
pub use self::device::DeviceCommand;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{UserId, UserRecord, Username, UsernameValidationError};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
