//! Readiness endpoint for load balancers and operators.

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;

/// Readiness check. Always `200 OK` with a plain-text body once serving.
#[utoipa::path(
    get,
    path = "/api/healthz",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready", body = String, content_type = "text/plain")
    )
)]
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body("OK")
}
