use super::*;

/// Tests an error response with a JSON error body.
///
/// Expected: message taken from the `error` field
#[test]
fn uses_json_error_field() {
    let err = ApiError::from_body(403, r#"{"error":"Missing permissions"}"#);

    assert_eq!(
        err,
        ApiError {
            status: 403,
            message: "Missing permissions".to_string()
        }
    );
}

/// Tests an error response with a plain text body.
///
/// Verifies the body text reaches the user instead of a generic message.
///
/// Expected: message equals the trimmed body
#[test]
fn falls_back_to_text_body() {
    let err = ApiError::from_body(500, "Internal Server Error\n");

    assert_eq!(err.status, 500);
    assert_eq!(err.message, "Internal Server Error");
}

/// Tests a JSON body that is not an error object.
///
/// Expected: raw body kept as the message
#[test]
fn keeps_unrecognised_json_as_text() {
    let err = ApiError::from_body(502, r#"{"detail":"bad gateway"}"#);

    assert_eq!(err.message, r#"{"detail":"bad gateway"}"#);
}

/// Tests an error response without a body.
///
/// Expected: "Unknown error"
#[test]
fn empty_body_is_unknown_error() {
    let err = ApiError::from_body(404, "  ");

    assert_eq!(err.message, "Unknown error");
}
