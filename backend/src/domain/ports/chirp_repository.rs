//! Port for chirp persistence.
//!
//! Adapters store chirps exactly as handed to them: length checks and
//! moderation happen before a [`NewChirp`] can be built. Whether the owning
//! user exists is the adapter's concern (a foreign key in PostgreSQL).

use async_trait::async_trait;

use crate::domain::{Chirp, ChirpId, NewChirp};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by chirp repository adapters.
    pub enum ChirpPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "chirp repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "chirp repository query failed: {message}",
    }
}

/// Storage for chirps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Insert a chirp and return the stored record.
    async fn create(&self, chirp: &NewChirp) -> Result<Chirp, ChirpPersistenceError>;

    /// Return every chirp, oldest first; chirps created in the same instant
    /// are ordered by identifier.
    async fn list(&self) -> Result<Vec<Chirp>, ChirpPersistenceError>;

    /// Fetch a chirp by identifier.
    ///
    /// `Ok(None)` is the not-found outcome and is distinct from a failure.
    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpPersistenceError>;
}
