use super::*;
use fitcoach::User;

fn session(email: &str) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: 4_000_000_000,
        user: User { id: "u1".to_owned(), email: Some(email.to_owned()), user_metadata: serde_json::Map::new() },
    }
}

#[test]
fn auth_state_starts_unrendered_and_signed_out() {
    let state = AuthState::default();
    assert!(!state.ready);
    assert_eq!(state.ui, AuthUiState::Unauthenticated);
    assert_eq!(state.email(), None);
}

#[test]
fn rendered_state_is_ready() {
    let state = AuthState::rendered(AuthUiState::Authenticated { email: Some("ana@example.com".to_owned()) });
    assert!(state.ready);
    assert_eq!(state.email(), Some("ana@example.com"));
}

#[test]
fn gate_starts_checking() {
    assert_eq!(Gate::default(), Gate::Checking);
    assert!(!Gate::Checking.is_allowed());
}

#[test]
fn gate_from_lookup() {
    let allowed = Gate::from_lookup(Some(session("ana@example.com")));
    assert!(allowed.is_allowed());
    assert_eq!(allowed.session().and_then(Session::email), Some("ana@example.com"));

    let redirecting = Gate::from_lookup(None);
    assert_eq!(redirecting, Gate::Redirecting);
    assert_eq!(redirecting.session(), None);
}
