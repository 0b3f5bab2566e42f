use super::*;
use fitcoach::{Session, User};

fn user() -> User {
    User { id: "u1".to_owned(), email: Some("ana@example.com".to_owned()), user_metadata: Map::new() }
}

#[test]
fn metadata_carries_full_name() {
    let input = RegisterInput {
        full_name: "Ana Lima".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
    };
    let metadata = signup_metadata(&input);
    assert_eq!(metadata.get("full_name"), Some(&Value::String("Ana Lima".to_owned())));
    assert_eq!(metadata.len(), 1);
}

#[test]
fn pending_confirmation_asks_to_check_email() {
    assert_eq!(registration_message(&Registration::ConfirmationPending(user())), MSG_CONFIRM_EMAIL);
}

#[test]
fn immediate_session_announces_redirect() {
    let session = Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: 4_000_000_000,
        user: user(),
    };
    assert_eq!(registration_message(&Registration::SignedIn(session)), MSG_SIGNED_UP);
}
