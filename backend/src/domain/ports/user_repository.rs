//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user whose identifier and timestamps are already assigned and
    /// return the stored record.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Irreversibly delete every user, returning how many rows went away.
    async fn delete_all(&self) -> Result<u64, UserPersistenceError>;
}
