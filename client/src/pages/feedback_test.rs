use super::*;

#[test]
fn only_error_and_info_carry_messages() {
    assert_eq!(FormStatus::Idle.message(), None);
    assert_eq!(FormStatus::Busy.message(), None);
    assert_eq!(FormStatus::Error("x".into()).message(), Some("x"));
    assert_eq!(FormStatus::Info("y".into()).class(), "form-message form-message--info");
    assert!(FormStatus::Busy.is_busy());
}

#[test]
fn validation_errors_show_service_text() {
    let message = error_message(&AuthError::Validation("Invalid login credentials".into()));
    assert_eq!(message, "Erreur : Invalid login credentials");
}

#[test]
fn rate_limit_gets_its_own_message() {
    let message = error_message(&AuthError::Service { status: 429, message: "slow down".into() });
    assert!(message.starts_with("Trop de tentatives"));
}

#[test]
fn configuration_errors_read_as_unavailable() {
    let message = error_message(&AuthError::NotConfigured("SUPABASE_URL".into()));
    assert_eq!(message, crate::auth::MSG_AUTH_UNAVAILABLE);
}
