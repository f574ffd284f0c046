//! Server construction and middleware wiring.

mod config;
mod lifecycle;

pub use config::{AppSettings, ServerConfig};
pub use lifecycle::run_until_interrupt;

use lifecycle::WORKER_SHUTDOWN_TIMEOUT;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

#[cfg(debug_assertions)]
use chirpy::doc::ApiDoc;
use chirpy::domain::{ChirpService, UserService};
use chirpy::inbound::http::assets::StaticFiles;
use chirpy::inbound::http::routes::{StaticRoots, configure};
use chirpy::inbound::http::state::HttpState;
use chirpy::middleware::Trace;
use chirpy::outbound::persistence::{DieselChirpRepository, DieselUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock = Arc::new(DefaultClock);
    HttpState::new(
        UserService::new(
            Arc::new(DieselUserRepository::new(config.db_pool.clone())),
            clock.clone(),
        ),
        ChirpService::new(
            Arc::new(DieselChirpRepository::new(config.db_pool.clone())),
            clock,
        ),
        Arc::clone(&config.hits),
        config.platform,
    )
}

fn build_app(
    http_state: web::Data<HttpState>,
    roots: StaticRoots,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .wrap(Trace)
        .configure(|cfg| configure(cfg, http_state, roots));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server described by `config`.
///
/// OS signal handling is disabled; callers drive shutdown through
/// [`run_until_interrupt`]. Workers are force-stopped one second after the
/// lifecycle budget, so the budget alone decides whether a drain overran.
///
/// # Errors
/// Returns [`std::io::Error`] when a static root cannot be opened or the
/// socket cannot be bound.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let roots = StaticRoots {
        app: StaticFiles::open(&config.app_root).map_err(std::io::Error::other)?,
        assets: StaticFiles::open(&config.assets_root).map_err(std::io::Error::other)?,
    };
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone(), roots.clone()))
        .disable_signals()
        .shutdown_timeout(WORKER_SHUTDOWN_TIMEOUT.as_secs())
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, platform = %config.platform, "serving");
    Ok(server)
}
