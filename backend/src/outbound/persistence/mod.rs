//! PostgreSQL persistence adapters for the credential store.

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

mod diesel_user_repository;
mod models;
mod pool;
mod retry;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolError};
pub use retry::await_store_ready;

/// Migrations embedded into the binary and applied at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
