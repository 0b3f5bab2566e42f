use super::*;

#[test]
fn relative_navigation_stays_on_site() {
    let renderer = TerminalRenderer::new("http://127.0.0.1:3000/dashboard.html?tab=1");
    renderer.navigate("login.html");
    assert_eq!(renderer.location(), "http://127.0.0.1:3000/login.html");
}

#[test]
fn absolute_navigation_replaces_location() {
    let renderer = TerminalRenderer::new("http://127.0.0.1:3000/login.html");
    renderer.navigate("https://accounts.example.com/authorize");
    assert_eq!(renderer.location(), "https://accounts.example.com/authorize");
}

#[test]
fn describe_names_the_user() {
    let state = AuthUiState::Authenticated { email: Some("ana@example.com".to_owned()) };
    assert_eq!(describe(&state), "signed in as ana@example.com");
    assert_eq!(describe(&AuthUiState::Unauthenticated), "signed out");
}
