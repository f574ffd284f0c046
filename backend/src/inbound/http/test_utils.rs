//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;

use crate::domain::ports::{MockChirpRepository, MockUserRepository};
use crate::domain::{ChirpService, HitCounter, Platform, UserService};
use crate::inbound::http::assets::StaticFiles;
use crate::inbound::http::routes::{StaticRoots, configure};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Build handler state over mocked repositories with a fresh hit counter.
pub fn state_with(
    users: MockUserRepository,
    chirps: MockChirpRepository,
    platform: Platform,
) -> HttpState {
    HttpState::new(
        UserService::new(Arc::new(users), Arc::new(DefaultClock)),
        ChirpService::new(Arc::new(chirps), Arc::new(DefaultClock)),
        Arc::new(HitCounter::new()),
        platform,
    )
}

/// Full route table over `state`, serving both static scopes from the
/// system temp directory.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let root = StaticFiles::open(std::env::temp_dir()).expect("temp dir is readable");
    let roots = StaticRoots {
        app: root.clone(),
        assets: root,
    };
    let state = web::Data::new(state);
    App::new()
        .wrap(Trace)
        .configure(move |cfg| configure(cfg, state, roots))
}
