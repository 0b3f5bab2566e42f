//! Hand-written doubles for the identity and page seams.

use std::cell::RefCell;

use serde_json::{Map, Value};

use super::decide::AuthUiState;
use super::env::{MemoryRedirectStore, PageRenderer};
use super::synchronizer::SessionSynchronizer;
use crate::config::SitePages;
use crate::error::AuthError;
use crate::identity::{
    AuthEvent, AuthEventHub, AuthSubscription, IdentityService, OAuthProvider, Registration, Session, SubscriptionId,
    User,
};

pub(crate) const WRONG_PASSWORD: &str = "wrong";

pub(crate) fn sample_session(email: &str) -> Session {
    Session {
        access_token: format!("token-{email}"),
        refresh_token: "refresh".into(),
        token_type: "bearer".into(),
        expires_in: 3600,
        expires_at: 9_999_999_999,
        user: User { id: format!("id-{email}"), email: Some(email.to_owned()), user_metadata: Map::new() },
    }
}

// =========================================================================
// MockIdentity
// =========================================================================

#[derive(Default)]
pub(crate) struct MockIdentity {
    hub: AuthEventHub,
    session: RefCell<Option<Session>>,
    failure: RefCell<Option<AuthError>>,
    calls: RefCell<Vec<String>>,
}

impl MockIdentity {
    pub(crate) fn with_session(session: Session) -> Self {
        let mock = Self::default();
        *mock.session.borrow_mut() = Some(session);
        mock
    }

    /// Make every subsequent call fail with `err`.
    pub(crate) fn fail_with(&self, err: AuthError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn current(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.hub.subscriber_count()
    }

    fn record(&self, call: String) -> Result<(), AuthError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn sign_in_as(&self, session: Session) -> Session {
        *self.session.borrow_mut() = Some(session.clone());
        self.hub.emit(&AuthEvent::signed_in(session.clone()));
        session
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityService for MockIdentity {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.record(format!("sign_in:{email}"))?;
        if password == WRONG_PASSWORD {
            return Err(AuthError::Validation("Invalid login credentials".into()));
        }
        Ok(self.sign_in_as(sample_session(email)))
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        metadata: Map<String, Value>,
    ) -> Result<Registration, AuthError> {
        self.record(format!("sign_up:{email}"))?;
        let mut session = sample_session(email);
        session.user.user_metadata = metadata;
        if email.starts_with("confirm") {
            return Ok(Registration::ConfirmationPending(session.user));
        }
        Ok(Registration::SignedIn(self.sign_in_as(session)))
    }

    async fn sign_in_with_oauth(&self, provider: &OAuthProvider, redirect_to: &str) -> Result<String, AuthError> {
        self.record(format!("oauth:{provider}"))?;
        Ok(format!("https://id.test/authorize?provider={provider}&redirect_to={redirect_to}"))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out".into())?;
        *self.session.borrow_mut() = None;
        self.hub.emit(&AuthEvent::signed_out());
        Ok(())
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        self.record(format!("reset:{email}:{redirect_to}"))
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        self.record("get_session".into())?;
        Ok(self.current())
    }

    fn on_auth_state_change(&self) -> AuthSubscription {
        self.hub.subscribe()
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.hub.unsubscribe(id);
    }
}

// =========================================================================
// MockRenderer
// =========================================================================

pub(crate) struct MockRenderer {
    location: RefCell<String>,
    navigations: RefCell<Vec<String>>,
    renders: RefCell<Vec<AuthUiState>>,
}

impl MockRenderer {
    pub(crate) fn at(location: &str) -> Self {
        Self {
            location: RefCell::new(location.to_owned()),
            navigations: RefCell::new(Vec::new()),
            renders: RefCell::new(Vec::new()),
        }
    }

    /// Simulate a new page load at `location`.
    pub(crate) fn visit(&self, location: &str) {
        *self.location.borrow_mut() = location.to_owned();
    }

    pub(crate) fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub(crate) fn renders(&self) -> Vec<AuthUiState> {
        self.renders.borrow().clone()
    }
}

impl PageRenderer for MockRenderer {
    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn navigate(&self, target: &str) {
        self.navigations.borrow_mut().push(target.to_owned());
    }

    fn render_auth(&self, state: &AuthUiState) {
        self.renders.borrow_mut().push(state.clone());
    }
}

pub(crate) type TestSync = SessionSynchronizer<MockIdentity, MockRenderer, MemoryRedirectStore>;

pub(crate) fn sync_at(location: &str, identity: MockIdentity) -> TestSync {
    SessionSynchronizer::new(identity, MockRenderer::at(location), MemoryRedirectStore::new(), SitePages::default())
}
