use super::*;

#[test]
fn from_status_maps_bad_request_to_validation() {
    let err = AuthError::from_status(400, "Invalid login credentials".into());
    assert_eq!(err, AuthError::Validation("Invalid login credentials".into()));
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn from_status_maps_unprocessable_to_validation() {
    assert!(matches!(AuthError::from_status(422, "weak password".into()), AuthError::Validation(_)));
}

#[test]
fn from_status_keeps_other_statuses_as_service_errors() {
    let err = AuthError::from_status(503, "unavailable".into());
    assert_eq!(err, AuthError::Service { status: 503, message: "unavailable".into() });
    assert_eq!(err.to_string(), "identity service error (503): unavailable");
}

#[test]
fn token_rejection_covers_auth_statuses_only() {
    assert!(AuthError::Service { status: 401, message: String::new() }.is_token_rejected());
    assert!(AuthError::Service { status: 404, message: String::new() }.is_token_rejected());
    assert!(AuthError::Validation("invalid refresh token".into()).is_token_rejected());
    assert!(!AuthError::Service { status: 500, message: String::new() }.is_token_rejected());
    assert!(!AuthError::Network("dns".into()).is_token_rejected());
}
