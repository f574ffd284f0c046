//! Users API handlers.
//!
//! ```text
//! POST /api/users {"email":"walt@breakingbad.com"}
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/users`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
}

/// Register a user.
///
/// The email is stored as given; uniqueness is enforced by storage and a
/// duplicate surfaces as a store failure.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Malformed request body", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(&payload.email).await?;
    Ok(HttpResponse::Created().json(user))
}
