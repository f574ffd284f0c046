//! User registration and the development-only bulk delete.

use std::sync::Arc;

use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::UserRepository;
use crate::domain::{Error, NewUser, User};

/// User service used by the HTTP adapter.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl UserService {
    /// Create a service over `users`, timestamping with `clock`.
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { users, clock }
    }

    /// Register `email` under a fresh identifier.
    pub async fn create_user(&self, email: &str) -> Result<User, Error> {
        let new_user = NewUser::new(email, self.clock.utc());
        self.users.create(&new_user).await.map_err(|err| {
            error!(error = %err, "failed to create user");
            Error::internal("Error creating user")
        })
    }

    /// Delete every user. Callers gate this on [`crate::domain::Platform`].
    pub async fn delete_all_users(&self) -> Result<u64, Error> {
        let deleted = self.users.delete_all().await.map_err(|err| {
            error!(error = %err, "failed to delete users");
            Error::internal("Error deleting users")
        })?;
        info!(deleted, "deleted all users");
        Ok(deleted)
    }
}
