//! PostgreSQL persistence adapters built on Diesel.
//!
//! Row structs and the table schema stay private; only the pool, the
//! repositories, and the migration runner are visible to the binary.

mod diesel_basic_error_mapping;
mod diesel_chirp_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_chirp_repository::DieselChirpRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
