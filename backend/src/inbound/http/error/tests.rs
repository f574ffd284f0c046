//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("Chirp is too long"), StatusCode::BAD_REQUEST)]
#[case(
    Error::forbidden("This endpoint is only available in development"),
    StatusCode::FORBIDDEN
)]
#[case(Error::not_found("Chirp not found"), StatusCode::NOT_FOUND)]
#[case(Error::method_not_allowed("Method not allowed"), StatusCode::METHOD_NOT_ALLOWED)]
#[case(Error::internal("Error creating chirp"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn response_body_is_the_public_message() {
    let response = Error::internal("Error retrieving chirps").error_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body: Value = serde_json::from_slice(&bytes).expect("error body is JSON");
    assert_eq!(body, json!({ "error": "Error retrieving chirps" }));
}

#[rstest]
#[case(Some(TRACE_ID))]
#[case(None)]
fn trace_header_follows_error(#[case] trace_id: Option<&str>) {
    let mut error = Error::not_found("Chirp not found");
    if let Some(id) = trace_id {
        error = error.with_trace_id(id);
    }

    let response = error.error_response();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("header is ascii"));

    assert_eq!(header, trace_id);
}

#[rstest]
#[actix_web::test]
async fn method_not_allowed_lists_accepted_methods() {
    let response = method_not_allowed("GET, HEAD");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response
            .headers()
            .get(actix_web::http::header::ALLOW)
            .map(|value| value.as_bytes()),
        Some(&b"GET, HEAD"[..])
    );
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body: Value = serde_json::from_slice(&bytes).expect("error body is JSON");
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}
