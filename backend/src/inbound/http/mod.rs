//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod control;
pub mod error;
pub mod health;
pub mod responses;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
