//! Outbound adapters implementing the domain's driven ports.

pub mod persistence;
pub mod relay;
