//! Chirps API handlers.
//!
//! ```text
//! POST /api/chirps {"body":"hello","user_id":"<uuid>"}
//! GET /api/chirps
//! GET /api/chirps/{chirp_id}
//! POST /api/validate_chirp {"body":"hello"}
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_chirp_id;

/// Request body for `POST /api/chirps`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateChirpRequest {
    /// Raw chirp text, at most 140 characters.
    pub body: String,
    /// Author of the chirp.
    #[schema(value_type = String, format = Uuid)]
    pub user_id: UserId,
}

/// Request body for `POST /api/validate_chirp`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ValidateChirpRequest {
    pub body: String,
}

/// Response body for `POST /api/validate_chirp`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ValidateChirpResponse {
    /// Moderated chirp text.
    pub cleaned_body: String,
}

/// Validate, moderate and store a chirp.
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = crate::inbound::http::schemas::ChirpSchema),
        (status = 400, description = "Malformed body or chirp too long", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["chirps"],
    operation_id = "createChirp"
)]
pub async fn create_chirp(
    state: web::Data<HttpState>,
    payload: web::Json<CreateChirpRequest>,
) -> ApiResult<HttpResponse> {
    let CreateChirpRequest { body, user_id } = payload.into_inner();
    let chirp = state.chirps.create_chirp(&body, user_id).await?;
    Ok(HttpResponse::Created().json(chirp))
}

/// List every chirp, oldest first.
#[utoipa::path(
    get,
    path = "/api/chirps",
    responses(
        (status = 200, description = "All chirps", body = [crate::inbound::http::schemas::ChirpSchema]),
        (status = 500, description = "Store failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["chirps"],
    operation_id = "listChirps"
)]
pub async fn list_chirps(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let chirps = state.chirps.list_chirps().await?;
    Ok(HttpResponse::Ok().json(chirps))
}

/// Fetch a single chirp.
#[utoipa::path(
    get,
    path = "/api/chirps/{chirp_id}",
    params(("chirp_id" = String, Path, description = "Chirp UUID")),
    responses(
        (status = 200, description = "The chirp", body = crate::inbound::http::schemas::ChirpSchema),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such chirp", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["chirps"],
    operation_id = "getChirp"
)]
pub async fn get_chirp(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_chirp_id(&path)?;
    let chirp = state.chirps.get_chirp(&id).await?;
    Ok(HttpResponse::Ok().json(chirp))
}

/// Return the moderated form of a chirp without storing it.
#[utoipa::path(
    post,
    path = "/api/validate_chirp",
    request_body = ValidateChirpRequest,
    responses(
        (status = 200, description = "Chirp is acceptable", body = ValidateChirpResponse),
        (status = 400, description = "Malformed body or chirp too long", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["chirps"],
    operation_id = "validateChirp"
)]
pub async fn validate_chirp(
    state: web::Data<HttpState>,
    payload: web::Json<ValidateChirpRequest>,
) -> ApiResult<HttpResponse> {
    let body = state.chirps.validate_chirp(&payload.body)?;
    Ok(HttpResponse::Ok().json(ValidateChirpResponse {
        cleaned_body: body.into(),
    }))
}
