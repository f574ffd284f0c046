//! Operator endpoints: visit metrics and the development-only reset.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use tracing::{info, warn};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Public message for resets outside development.
pub const RESET_FORBIDDEN: &str = "This endpoint is only available in development";

fn render_metrics(hits: i64) -> String {
    format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>"
    )
}

/// HTML page reporting the file-server hit count.
#[utoipa::path(
    get,
    path = "/admin/metrics",
    responses(
        (status = 200, description = "Metrics page", body = String, content_type = "text/html")
    ),
    tags = ["admin"],
    operation_id = "metrics"
)]
pub async fn metrics(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_metrics(state.hits.load()))
}

/// Zero the hit counter and delete every user.
///
/// Only permitted when the server runs in development mode. The counter is
/// zeroed before users are deleted, so a store failure still leaves it reset.
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "State reset"),
        (status = 403, description = "Not running in development", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "reset"
)]
pub async fn reset(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    if !state.platform.allows_reset() {
        warn!(platform = %state.platform, "reset rejected outside development");
        return Err(Error::forbidden(RESET_FORBIDDEN));
    }

    state.hits.reset();
    let deleted = state.users.delete_all_users().await?;
    info!(deleted, "development state reset");
    Ok(HttpResponse::Ok().finish())
}
