//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when the migrations change.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        /// Unique email address as supplied at registration.
        email -> Text,
    }
}

diesel::table! {
    /// Moderated chirps.
    chirps (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        /// Moderated text, at most 140 characters before moderation.
        body -> Text,
        /// Owning user; rows cascade when the user is deleted.
        user_id -> Uuid,
    }
}

diesel::joinable!(chirps -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(users, chirps);
