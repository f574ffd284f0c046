//! Domain ports for the hexagonal boundary.
//!
//! Repositories are driven ports implemented by outbound adapters; services
//! in the parent module depend on them through `Arc<dyn …>`.

mod macros;
pub(crate) use macros::define_port_error;

mod chirp_repository;
mod user_repository;

#[cfg(test)]
pub use chirp_repository::MockChirpRepository;
pub use chirp_repository::{ChirpPersistenceError, ChirpRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
