//! Outbound device relay adapters.

mod http_relay;

pub use http_relay::{HttpDeviceRelay, RelayBuildError};
