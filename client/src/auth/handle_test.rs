use super::*;

#[test]
fn config_requires_both_values() {
    assert_eq!(config_from(None, Some("key")), Err(AuthError::NotConfigured("SUPABASE_URL".into())));
    assert_eq!(
        config_from(Some("https://xyz.supabase.co"), Some("  ")),
        Err(AuthError::NotConfigured("SUPABASE_ANON_KEY".into()))
    );
}

#[test]
fn config_normalizes_url() {
    let config = config_from(Some("https://xyz.supabase.co/ "), Some(" anon ")).unwrap();
    assert_eq!(config.url, "https://xyz.supabase.co");
    assert_eq!(config.anon_key, "anon");
}

#[test]
fn site_pages_default_without_override() {
    let pages = site_pages();
    assert_eq!(pages.login, "login.html");
    assert_eq!(pages.dashboard, "dashboard.html");
}

#[test]
fn handle_starts_empty_and_not_ready() {
    let owner = Owner::new();
    owner.set();

    let handle = AuthHandle::empty();
    assert!(handle.sync().is_none());
    assert!(!handle.ready.get_untracked());
}

#[test]
fn build_sync_uses_site_pages() {
    let owner = Owner::new();
    owner.set();

    let auth = RwSignal::new(AuthState::default());
    let sync = build_sync(SupabaseConfig::new("http://127.0.0.1:9", "anon"), auth).unwrap();
    assert_eq!(sync.pages(), &site_pages());
    assert_eq!(sync.identity().config().url, "http://127.0.0.1:9");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn install_outside_browser_leaves_handle_empty() {
    let owner = Owner::new();
    owner.set();

    let auth = RwSignal::new(AuthState::default());
    let handle = install(auth);
    assert!(handle.sync().is_none());
    assert!(!handle.ready.get_untracked());
    assert!(!auth.get_untracked().ready);
}
