//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the serialised shape of their domain counterparts and
//! are referenced from handler `#[utoipa::path]` annotations.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Every error response is a single-field object.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "Chirp is too long")]
    error: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Creation time (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    /// Last update time (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
    /// Registered email address.
    #[schema(example = "walt@breakingbad.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::Chirp`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Chirp)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ChirpSchema {
    /// Stable chirp identifier.
    #[schema(value_type = String, format = Uuid)]
    id: String,
    /// Creation time (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    /// Last update time (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
    /// Moderated text.
    #[schema(example = "I had something interesting for breakfast")]
    body: String,
    /// Author identifier.
    #[schema(value_type = String, format = Uuid)]
    user_id: String,
}
