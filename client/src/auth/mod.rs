//! Browser wiring of the session synchronizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`install`] once. In the browser it builds the Supabase client
//! over `localStorage`, the signal renderer, and the `sessionStorage` redirect
//! slot, then starts the [`AuthContext`] and completes any OAuth redirect
//! that brought the user here. Pages reach the synchronizer through the
//! [`AuthHandle`] context and wait for [`AuthHandle::is_ready`] before gating.
//!
//! During SSR nothing is built: the handle stays empty and never becomes
//! ready, so protected pages render their `Checking` state on the server.

pub mod renderer;
pub mod storage;

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::rc::Rc;

use fitcoach::identity::SupabaseAuth;
use fitcoach::{AuthContext, AuthError, SessionSynchronizer, SitePages, SupabaseConfig};
use leptos::prelude::*;

use self::renderer::SignalRenderer;
use self::storage::{LocalSessionStore, SessionRedirectStore};
use crate::state::auth::AuthState;

pub type BrowserIdentity = SupabaseAuth<LocalSessionStore>;
pub type BrowserSync = SessionSynchronizer<BrowserIdentity, SignalRenderer, SessionRedirectStore>;
pub type BrowserContext = AuthContext<BrowserIdentity, SignalRenderer, SessionRedirectStore>;

/// Shown when an auth action is attempted before (or without) a client.
pub const MSG_AUTH_UNAVAILABLE: &str = "Service d'authentification indisponible.";

/// Shared, copyable access to the app's synchronizer.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    sync: StoredValue<Option<Rc<BrowserSync>>, LocalStorage>,
    context: StoredValue<Option<BrowserContext>, LocalStorage>,
    ready: RwSignal<bool>,
}

impl AuthHandle {
    pub fn empty() -> Self {
        Self { sync: StoredValue::new_local(None), context: StoredValue::new_local(None), ready: RwSignal::new(false) }
    }

    pub fn sync(&self) -> Option<Rc<BrowserSync>> {
        self.sync.with_value(Clone::clone)
    }

    /// Startup finished: subscribed, session checked, redirect completed.
    /// Reactive.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

/// Page names, with the protected list overridable at build time through
/// `FITCOACH_PROTECTED_PAGES`.
pub fn site_pages() -> SitePages {
    match option_env!("FITCOACH_PROTECTED_PAGES") {
        Some(raw) if !raw.trim().is_empty() => SitePages::default().with_protected_list(raw),
        _ => SitePages::default(),
    }
}

/// Supabase project baked in at build time.
///
/// # Errors
///
/// Returns [`AuthError::NotConfigured`] naming the first missing variable.
pub fn supabase_config() -> Result<SupabaseConfig, AuthError> {
    config_from(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
}

fn config_from(url: Option<&str>, anon_key: Option<&str>) -> Result<SupabaseConfig, AuthError> {
    let present = |v: Option<&str>| v.filter(|s| !s.trim().is_empty());
    let url = present(url).ok_or_else(|| AuthError::NotConfigured("SUPABASE_URL".into()))?;
    let anon_key = present(anon_key).ok_or_else(|| AuthError::NotConfigured("SUPABASE_ANON_KEY".into()))?;
    Ok(SupabaseConfig::new(url, anon_key))
}

/// Assemble the browser synchronizer writing into `auth`.
///
/// # Errors
///
/// Propagates configuration and HTTP client construction failures.
pub fn build_sync(config: SupabaseConfig, auth: RwSignal<AuthState>) -> Result<BrowserSync, AuthError> {
    let identity = SupabaseAuth::new(config, LocalSessionStore)?;
    Ok(SessionSynchronizer::new(identity, SignalRenderer::new(auth), SessionRedirectStore, site_pages()))
}

/// Create the handle and, in the browser, start auth in the background.
pub fn install(auth: RwSignal<AuthState>) -> AuthHandle {
    let handle = AuthHandle::empty();

    #[cfg(feature = "hydrate")]
    {
        match supabase_config().and_then(|config| build_sync(config, auth)) {
            Ok(sync) => {
                let sync = Rc::new(sync);
                handle.sync.set_value(Some(Rc::clone(&sync)));
                leptos::task::spawn_local(start(handle, sync));
            }
            Err(e) => {
                tracing::error!(error = %e, "auth client unavailable");
                auth.set(AuthState::rendered(fitcoach::AuthUiState::Unauthenticated));
                handle.ready.set(true);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    handle
}

#[cfg(feature = "hydrate")]
async fn start(handle: AuthHandle, sync: Rc<BrowserSync>) {
    let context = AuthContext::start(Rc::clone(&sync)).await;
    leptos::task::spawn_local(context.listener());
    handle.context.set_value(Some(context));

    let hash = web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
    if !hash.is_empty() {
        match sync.identity().recover_session_from_url(&hash).await {
            Ok(Some(_)) => strip_fragment(),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "oauth redirect could not be completed"),
        }
    }

    handle.ready.set(true);
    tracing::debug!("auth started");
}

/// Drop the token fragment from the address bar without reloading.
#[cfg(feature = "hydrate")]
fn strip_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let clean = format!("{}{}", location.pathname().unwrap_or_default(), location.search().unwrap_or_default());
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean));
    }
}
