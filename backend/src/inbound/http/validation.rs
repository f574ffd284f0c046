//! Shared validation helpers for inbound HTTP adapters.
//!
//! JSON bodies are decoded without a content-type check; a body that fails to
//! decode is answered with `400` and a message chosen by the route.

use actix_web::error::JsonPayloadError;
use actix_web::web;
use tracing::debug;

use crate::domain::{ChirpId, Error};

/// Public message for malformed user envelopes.
pub const INVALID_USER_PAYLOAD: &str = "Invalid request payload";
/// Public message for malformed chirp envelopes.
pub const INVALID_CHIRP_PAYLOAD: &str = "Something went wrong";
/// Public message for chirp identifiers that are not UUIDs.
pub const INVALID_CHIRP_ID: &str = "Invalid chirp ID";

/// JSON extractor configuration answering decode failures with `message`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use chirpy::inbound::http::validation::{INVALID_USER_PAYLOAD, json_config};
///
/// let _app = App::new().service(web::resource("/api/users").app_data(json_config(INVALID_USER_PAYLOAD)));
/// ```
pub fn json_config(message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(move |err: JsonPayloadError, _req| {
            debug!(error = %err, "rejected request body");
            Error::invalid_request(message).into()
        })
}

/// Parse a path segment as a [`ChirpId`].
pub(crate) fn parse_chirp_id(raw: &str) -> Result<ChirpId, Error> {
    raw.parse()
        .map_err(|_| Error::invalid_request(INVALID_CHIRP_ID))
}
