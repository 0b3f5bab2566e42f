use super::*;
use crate::sync::decide::AuthUiState;
use crate::sync::test_support::{MockIdentity, sample_session, sync_at};

#[tokio::test]
async fn start_skips_session_check_on_login_page() {
    let ctx = AuthContext::start(sync_at("https://fit.test/login.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    assert!(sync.identity().calls().is_empty());
    assert!(sync.renderer().renders().is_empty());
}

#[tokio::test]
async fn start_checks_session_elsewhere() {
    let identity = MockIdentity::with_session(sample_session("ana@example.com"));
    let ctx = AuthContext::start(sync_at("https://fit.test/index.html", identity)).await;
    let sync = ctx.synchronizer();
    assert_eq!(sync.identity().calls(), vec!["get_session".to_owned()]);
    assert_eq!(
        sync.renderer().renders(),
        vec![AuthUiState::Authenticated { email: Some("ana@example.com".into()) }]
    );
}

#[tokio::test]
async fn start_subscribes_once() {
    let ctx = AuthContext::start(sync_at("https://fit.test/index.html", MockIdentity::default())).await;
    assert_eq!(ctx.synchronizer().identity().subscriber_count(), 1);
    assert!(!ctx.is_closed());
}

#[tokio::test]
async fn listener_applies_events_until_shutdown() {
    let ctx = AuthContext::start(sync_at("https://fit.test/stats.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    let listener = ctx.listener();

    sync.identity().sign_out().await.unwrap();
    ctx.shutdown();
    listener.await;

    assert_eq!(sync.renderer().navigations(), vec!["index.html".to_owned()]);
}

#[tokio::test]
async fn second_listener_completes_immediately() {
    let ctx = AuthContext::start(sync_at("https://fit.test/index.html", MockIdentity::default())).await;
    let _first = ctx.listener();
    ctx.listener().await;
}

#[tokio::test]
async fn shutdown_is_idempotent_and_unsubscribes() {
    let ctx = AuthContext::start(sync_at("https://fit.test/index.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();

    ctx.shutdown();
    ctx.shutdown();

    assert!(ctx.is_closed());
    assert_eq!(sync.identity().subscriber_count(), 0);
}

#[tokio::test]
async fn events_after_shutdown_are_ignored() {
    let ctx = AuthContext::start(sync_at("https://fit.test/stats.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    let listener = ctx.listener();

    ctx.shutdown();
    sync.identity().sign_out().await.unwrap();
    listener.await;

    assert!(sync.renderer().navigations().is_empty());
}

#[tokio::test]
async fn drop_unsubscribes() {
    let ctx = AuthContext::start(sync_at("https://fit.test/index.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    drop(ctx);
    assert_eq!(sync.identity().subscriber_count(), 0);
}

#[tokio::test]
async fn protected_page_round_trip_through_login() {
    let ctx = AuthContext::start(sync_at("https://fit.test/dashboard.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    let listener = ctx.listener();

    assert_eq!(sync.protect_private_page().await, None);
    assert_eq!(sync.renderer().navigations(), vec!["login.html".to_owned()]);
    assert_eq!(sync.redirects().get().as_deref(), Some("https://fit.test/dashboard.html"));

    sync.renderer().visit("https://fit.test/login.html");
    let session = sync.login_with_email("ana@example.com", "secret").await.unwrap();
    assert_eq!(session.email(), Some("ana@example.com"));

    ctx.shutdown();
    listener.await;

    assert_eq!(
        sync.renderer().navigations(),
        vec!["login.html".to_owned(), "https://fit.test/dashboard.html".to_owned()]
    );
    assert_eq!(sync.redirects().get(), None);
    assert_eq!(
        sync.renderer().renders().last(),
        Some(&AuthUiState::Authenticated { email: Some("ana@example.com".into()) })
    );
}

#[tokio::test]
async fn events_emitted_directly_reach_the_listener() {
    let ctx = AuthContext::start(sync_at("https://fit.test/register.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    let listener = ctx.listener();

    sync.identity().sign_in_with_password("ana@example.com", "secret").await.unwrap();
    ctx.shutdown();
    listener.await;

    // No pending redirect: the page stays put.
    assert!(sync.renderer().navigations().is_empty());
    assert_eq!(
        sync.renderer().renders().last(),
        Some(&AuthUiState::Authenticated { email: Some("ana@example.com".into()) })
    );
}

#[tokio::test]
async fn form_login_enters_dashboard_once() {
    let ctx = AuthContext::start(sync_at("https://fit.test/login.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    let listener = ctx.listener();

    sync.login_with_email("ana@example.com", "secret").await.unwrap();
    sync.enter_dashboard();
    ctx.shutdown();
    listener.await;

    assert_eq!(sync.renderer().navigations(), vec!["dashboard.html".to_owned()]);
}

#[tokio::test]
async fn form_login_with_pending_redirect_follows_only_the_redirect() {
    let ctx = AuthContext::start(sync_at("https://fit.test/login.html", MockIdentity::default())).await;
    let sync = ctx.synchronizer();
    sync.redirects().set("https://fit.test/stats.html");
    let listener = ctx.listener();

    sync.login_with_email("ana@example.com", "secret").await.unwrap();
    sync.enter_dashboard();
    ctx.shutdown();
    listener.await;

    assert_eq!(sync.renderer().navigations(), vec!["https://fit.test/stats.html".to_owned()]);
    assert_eq!(sync.redirects().get(), None);
}

#[tokio::test]
async fn logout_on_protected_page_navigates_then_signed_out_repeats_it() {
    let identity = MockIdentity::with_session(sample_session("ana@example.com"));
    let ctx = AuthContext::start(sync_at("https://fit.test/stats.html", identity)).await;
    let sync = ctx.synchronizer();
    let listener = ctx.listener();

    sync.logout().await;
    ctx.shutdown();
    listener.await;

    assert_eq!(sync.renderer().navigations(), vec!["index.html".to_owned(), "index.html".to_owned()]);
    assert_eq!(sync.renderer().renders().last(), Some(&AuthUiState::Unauthenticated));
}
