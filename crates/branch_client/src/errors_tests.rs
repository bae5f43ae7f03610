use super::*;
use std::error::Error as StdError;

#[test]
fn test_auth_error() {
    let error = Error::AuthError("Invalid credentials".to_string());

    // Test error message
    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: Invalid credentials"
    );

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_deserialization_error_keeps_source() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = Error::from(serde_error);

    assert!(error
        .to_string()
        .starts_with("Failed to deserialize GitHub response"));
    assert!(error.source().is_some());
}

#[test]
fn test_invalid_response_error() {
    let error = Error::InvalidResponse;

    assert_eq!(error.to_string(), "Invalid response format");
    assert!(error.source().is_none());
}

#[test]
fn test_missing_link_error() {
    let error = Error::MissingLink("self");

    assert_eq!(error.to_string(), "Branch has no 'self' link");
    assert!(error.source().is_none());
}

#[test]
fn test_not_found_error() {
    let error = Error::NotFound;

    assert_eq!(error.to_string(), "Resource not found");
    assert!(error.source().is_none());
}

#[test]
fn test_request_error_carries_status_and_body() {
    let error = Error::Request {
        status: http::StatusCode::UNPROCESSABLE_ENTITY,
        body: r#"{"message":"Validation Failed"}"#.to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Unexpected status 422 Unprocessable Entity returned from GitHub"
    );
    match error {
        Error::Request { status, body } => {
            assert_eq!(status.as_u16(), 422);
            assert!(body.contains("Validation Failed"));
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
