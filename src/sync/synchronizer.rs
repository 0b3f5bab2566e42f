//! Session Synchronizer: identity calls plus the effectful half of the auth
//! state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call the operations here; the [`AuthContext`](super::AuthContext)
//! feeds auth events into [`SessionSynchronizer::handle_event`]. All state is
//! either in the Identity Service (session), the redirect store
//! (PendingRedirect), or a single per-load flag (page declared protected).
//!
//! ERROR HANDLING
//! ==============
//! Identity failures come back as `Err(AuthError)` for the page to display.
//! `logout` and `check_session` log and swallow theirs, since they must never
//! block navigation.

#[cfg(test)]
#[path = "synchronizer_test.rs"]
mod synchronizer_test;

use std::cell::Cell;

use serde_json::{Map, Value};

use super::decide::{AuthUiState, Decision, PageContext, decide};
use super::env::{PageRenderer, RedirectStore};
use super::location::{page_id, page_url};
use crate::config::SitePages;
use crate::error::AuthError;
use crate::identity::{AuthEvent, IdentityService, OAuthProvider, Registration, Session};

pub struct SessionSynchronizer<I, P, S> {
    identity: I,
    renderer: P,
    redirects: S,
    pages: SitePages,
    declared_protected: Cell<bool>,
}

impl<I, P, S> SessionSynchronizer<I, P, S>
where
    I: IdentityService,
    P: PageRenderer,
    S: RedirectStore,
{
    #[must_use]
    pub fn new(identity: I, renderer: P, redirects: S, pages: SitePages) -> Self {
        Self { identity, renderer, redirects, pages, declared_protected: Cell::new(false) }
    }

    #[must_use]
    pub fn identity(&self) -> &I {
        &self.identity
    }

    #[must_use]
    pub fn renderer(&self) -> &P {
        &self.renderer
    }

    #[must_use]
    pub fn redirects(&self) -> &S {
        &self.redirects
    }

    #[must_use]
    pub fn pages(&self) -> &SitePages {
        &self.pages
    }

    /// Page identifier of the current location.
    #[must_use]
    pub fn current_page(&self) -> String {
        page_id(&self.renderer.location()).to_owned()
    }

    /// Login and registration pages skip the page-load session check.
    #[must_use]
    pub fn on_auth_page(&self) -> bool {
        self.pages.is_auth_page(&self.current_page())
    }

    /// # Errors
    ///
    /// Returns the Identity Service error unchanged.
    pub async fn login_with_email(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        match self.identity.sign_in_with_password(email, password).await {
            Ok(session) => {
                tracing::info!(user_id = session.user_id(), "login succeeded");
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// Returns the Identity Service error unchanged.
    pub async fn register_with_email(
        &self,
        email: &str,
        password: &str,
        metadata: Map<String, Value>,
    ) -> Result<Registration, AuthError> {
        match self.identity.sign_up(email, password, metadata).await {
            Ok(registration) => {
                tracing::info!(
                    user_id = registration.user().id.as_str(),
                    signed_in = registration.session().is_some(),
                    "registration succeeded"
                );
                Ok(registration)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration failed");
                Err(e)
            }
        }
    }

    /// After a successful form sign-in, go to the dashboard unless a
    /// PendingRedirect is waiting. The `SIGNED_IN` listener follows that one.
    pub fn enter_dashboard(&self) {
        if self.redirects.get().is_some_and(|target| !target.is_empty()) {
            return;
        }
        self.renderer.navigate(&self.pages.dashboard);
    }

    /// Start a redirect-based OAuth sign-in returning to the dashboard.
    /// Completion arrives later as a `SIGNED_IN` event.
    ///
    /// # Errors
    ///
    /// Returns the Identity Service error; no navigation happens then.
    pub async fn login_with_oauth(&self, provider: &OAuthProvider) -> Result<(), AuthError> {
        let redirect_to = page_url(&self.renderer.location(), &self.pages.dashboard);
        match self.identity.sign_in_with_oauth(provider, &redirect_to).await {
            Ok(url) => {
                tracing::info!(%provider, "redirecting to oauth provider");
                self.renderer.navigate(&url);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%provider, error = %e, "oauth sign-in failed");
                Err(e)
            }
        }
    }

    /// Sign out and go to the landing page. Failures are logged only; the
    /// page is left as it was.
    ///
    /// On a protected page the queued `SIGNED_OUT` navigates to the landing
    /// page a second time, after this one.
    pub async fn logout(&self) {
        match self.identity.sign_out().await {
            Ok(()) => self.renderer.navigate(&self.pages.landing),
            Err(e) => tracing::error!(error = %e, "logout failed"),
        }
    }

    /// Request a password-reset email returning to the settings page.
    ///
    /// # Errors
    ///
    /// Returns the Identity Service error unchanged.
    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let redirect_to = page_url(&self.renderer.location(), &self.pages.settings);
        self.identity.reset_password_for_email(email, &redirect_to).await.inspect_err(|e| {
            tracing::warn!(error = %e, "password reset request failed");
        })
    }

    /// Query the current session and render the auth chrome for it.
    /// Idempotent. Errors are logged and yield `None` with the UI untouched.
    pub async fn check_session(&self) -> Option<Session> {
        match self.identity.get_session().await {
            Ok(session) => {
                self.renderer.render_auth(&AuthUiState::from_session(session.as_ref()));
                session
            }
            Err(e) => {
                tracing::error!(error = %e, "session check failed");
                None
            }
        }
    }

    /// Gate for protected pages. Call before rendering protected content.
    ///
    /// Without a session the current location becomes the PendingRedirect
    /// and the browser is sent to the login page. With one, the session is
    /// returned and nothing is written. Either way this page counts as
    /// protected for the sign-out decision.
    pub async fn protect_private_page(&self) -> Option<Session> {
        self.declared_protected.set(true);
        let session = self.identity.get_session().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "session lookup failed, treating page as signed out");
            None
        });
        if session.is_none() {
            let here = self.renderer.location();
            tracing::info!(from = %here, "no session, redirecting to login");
            self.redirects.set(&here);
            self.renderer.navigate(&self.pages.login);
        }
        session
    }

    /// Apply one auth event. Returns the decision that was applied.
    pub fn handle_event(&self, event: &AuthEvent) -> Decision {
        let location = self.renderer.location();
        let page = PageContext { page: page_id(&location), declared_protected: self.declared_protected.get() };
        let pending = self.redirects.get();
        let decision = decide(event, pending.as_deref(), page, &self.pages);
        self.apply(&decision);
        decision
    }

    fn apply(&self, decision: &Decision) {
        if decision.consume_redirect {
            self.redirects.remove();
        }
        if let Some(state) = &decision.render {
            self.renderer.render_auth(state);
        }
        if let Some(target) = &decision.navigate {
            tracing::debug!(%target, "auth event navigation");
            self.renderer.navigate(target);
        }
    }
}
