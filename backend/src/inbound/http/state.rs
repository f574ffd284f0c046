//! Shared HTTP adapter state.
//!
//! Handlers receive this state through `actix_web::web::Data` so they depend
//! only on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::{ChirpService, HitCounter, Platform, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UserService,
    pub chirps: ChirpService,
    pub hits: Arc<HitCounter>,
    pub platform: Platform,
}

impl HttpState {
    /// Bundle the services with the shared counter and deployment mode.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use chirpy::domain::{ChirpService, HitCounter, Platform, UserService};
    /// use chirpy::inbound::http::state::HttpState;
    /// # fn build(users: UserService, chirps: ChirpService) -> HttpState {
    /// HttpState::new(users, chirps, Arc::new(HitCounter::new()), Platform::from_setting("dev"))
    /// # }
    /// ```
    pub fn new(
        users: UserService,
        chirps: ChirpService,
        hits: Arc<HitCounter>,
        platform: Platform,
    ) -> Self {
        Self {
            users,
            chirps,
            hits,
            platform,
        }
    }
}
