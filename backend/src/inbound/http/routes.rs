//! Route table for the Chirpy HTTP surface.
//!
//! ```text
//! GET  /api/healthz
//! POST /api/users
//! POST /api/chirps        GET /api/chirps
//! GET  /api/chirps/{chirp_id}
//! POST /api/validate_chirp
//! GET  /admin/metrics     POST /admin/reset
//! GET  /app/*             (counted)
//! GET  /assets/*
//! ```

use actix_web::{HttpResponse, Route, web};

use crate::domain::Error;
use crate::inbound::http::admin::{metrics, reset};
use crate::inbound::http::assets::{StaticFiles, serve_file};
use crate::inbound::http::chirps::{create_chirp, get_chirp, list_chirps, validate_chirp};
use crate::inbound::http::error::method_not_allowed;
use crate::inbound::http::health::healthz;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::create_user;
use crate::inbound::http::validation::{INVALID_CHIRP_PAYLOAD, INVALID_USER_PAYLOAD, json_config};
use crate::middleware::HitCounting;

/// Directories served under `/app` and `/assets`.
#[derive(Clone)]
pub struct StaticRoots {
    pub app: StaticFiles,
    pub assets: StaticFiles,
}

/// Register every route, the shared state and the JSON 404 fallback.
///
/// Only the `/app` scope is wrapped in [`HitCounting`].
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use chirpy::inbound::http::routes::{StaticRoots, configure};
/// use chirpy::inbound::http::state::HttpState;
/// # fn build(state: web::Data<HttpState>, roots: StaticRoots) {
/// let _app = App::new().configure(|cfg| configure(cfg, state, roots));
/// # }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<HttpState>, roots: StaticRoots) {
    let hits = state.hits.clone();
    cfg.app_data(state)
        .service(
            web::resource("/api/healthz")
                .route(web::get().to(healthz))
                .default_service(allowing("GET")),
        )
        .service(
            web::resource("/api/users")
                .app_data(json_config(INVALID_USER_PAYLOAD))
                .route(web::post().to(create_user))
                .default_service(allowing("POST")),
        )
        .service(
            web::resource("/api/chirps")
                .app_data(json_config(INVALID_CHIRP_PAYLOAD))
                .route(web::post().to(create_chirp))
                .route(web::get().to(list_chirps))
                .default_service(allowing("GET, POST")),
        )
        .service(
            web::resource("/api/chirps/{chirp_id}")
                .route(web::get().to(get_chirp))
                .default_service(allowing("GET")),
        )
        .service(
            web::resource("/api/validate_chirp")
                .app_data(json_config(INVALID_CHIRP_PAYLOAD))
                .route(web::post().to(validate_chirp))
                .default_service(allowing("POST")),
        )
        .service(
            web::resource("/admin/metrics")
                .route(web::get().to(metrics))
                .default_service(allowing("GET")),
        )
        .service(
            web::resource("/admin/reset")
                .route(web::post().to(reset))
                .default_service(allowing("POST")),
        )
        .service(
            web::scope("/app")
                .app_data(web::Data::new(roots.app))
                .wrap(HitCounting::new(hits))
                .default_service(web::to(serve_file)),
        )
        .service(
            web::scope("/assets")
                .app_data(web::Data::new(roots.assets))
                .default_service(web::to(serve_file)),
        )
        .default_service(web::to(not_found));
}

/// Fallback for a known resource hit with a method it does not serve.
fn allowing(allow: &'static str) -> Route {
    web::to(move || async move { method_not_allowed(allow) })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(Error::not_found("Not found"))
}
