//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every JSON endpoint of the inbound layer together with
//! the schema wrappers from [`crate::inbound::http::schemas`], keeping domain
//! types free of utoipa derives. The document backs Swagger UI in debug
//! builds and is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::chirps::{
    CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse,
};
use crate::inbound::http::schemas::{ChirpSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::CreateUserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chirpy API",
        description = "Short-message posting service with user registration and operator endpoints."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::healthz,
        crate::inbound::http::users::create_user,
        crate::inbound::http::chirps::create_chirp,
        crate::inbound::http::chirps::list_chirps,
        crate::inbound::http::chirps::get_chirp,
        crate::inbound::http::chirps::validate_chirp,
        crate::inbound::http::admin::metrics,
        crate::inbound::http::admin::reset,
    ),
    components(schemas(
        UserSchema,
        ChirpSchema,
        ErrorSchema,
        CreateUserRequest,
        CreateChirpRequest,
        ValidateChirpRequest,
        ValidateChirpResponse
    )),
    tags(
        (name = "health", description = "Readiness check"),
        (name = "users", description = "User registration"),
        (name = "chirps", description = "Posting and reading chirps"),
        (name = "admin", description = "Operator metrics and development reset")
    )
)]
pub struct ApiDoc;
