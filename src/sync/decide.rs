//! Pure auth state machine.
//!
//! DESIGN
//! ======
//! `decide` maps an auth event plus the current PendingRedirect and page to a
//! [`Decision`]. It touches nothing; the synchronizer applies the decision
//! (render, storage, navigation). This keeps every transition testable
//! without a document.

#[cfg(test)]
#[path = "decide_test.rs"]
mod decide_test;

use crate::config::SitePages;
use crate::identity::{AuthChangeEvent, AuthEvent, Session};

pub const LABEL_AUTHENTICATED: &str = "Mon Dashboard";
pub const LABEL_UNAUTHENTICATED: &str = "Connexion";
pub const CLASS_AUTHENTICATED: &str = "btn-secondary";
pub const CLASS_UNAUTHENTICATED: &str = "btn-primary";

/// View model for the auth chrome (action buttons, email display).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthUiState {
    #[default]
    Unauthenticated,
    Authenticated {
        email: Option<String>,
    },
}

impl AuthUiState {
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self::Authenticated { email: session.email().map(str::to_owned) },
            None => Self::Unauthenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Authenticated { email } => email.as_deref(),
            Self::Unauthenticated => None,
        }
    }

    /// Text for `.auth-action-btn`.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.is_authenticated() { LABEL_AUTHENTICATED } else { LABEL_UNAUTHENTICATED }
    }

    /// Target of `.auth-action-btn`.
    #[must_use]
    pub fn action_href<'a>(&self, pages: &'a SitePages) -> &'a str {
        if self.is_authenticated() { &pages.dashboard } else { &pages.login }
    }

    /// `(class to add, class to remove)` on `.auth-action-btn`.
    #[must_use]
    pub fn action_classes(&self) -> (&'static str, &'static str) {
        if self.is_authenticated() {
            (CLASS_AUTHENTICATED, CLASS_UNAUTHENTICATED)
        } else {
            (CLASS_UNAUTHENTICATED, CLASS_AUTHENTICATED)
        }
    }
}

/// Where the user currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContext<'a> {
    /// Last path segment of the current location.
    pub page: &'a str,
    /// The page called `protect_private_page` during this load.
    pub declared_protected: bool,
}

/// Effects to apply for one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    pub render: Option<AuthUiState>,
    pub navigate: Option<String>,
    /// Clear the PendingRedirect (it is being followed).
    pub consume_redirect: bool,
}

impl Decision {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.render.is_none() && self.navigate.is_none() && !self.consume_redirect
    }
}

#[must_use]
pub fn decide(event: &AuthEvent, pending_redirect: Option<&str>, page: PageContext<'_>, pages: &SitePages) -> Decision {
    match event.kind {
        AuthChangeEvent::SignedIn => {
            let render = Some(AuthUiState::from_session(event.session.as_ref()));
            if let Some(target) = pending_redirect.filter(|t| !t.is_empty()) {
                return Decision { render, navigate: Some(target.to_owned()), consume_redirect: true };
            }
            Decision { render, navigate: None, consume_redirect: false }
        }
        AuthChangeEvent::SignedOut => {
            let protected = page.declared_protected || pages.is_protected(page.page);
            Decision {
                render: Some(AuthUiState::Unauthenticated),
                navigate: protected.then(|| pages.landing.clone()),
                consume_redirect: false,
            }
        }
        AuthChangeEvent::InitialSession
        | AuthChangeEvent::TokenRefreshed
        | AuthChangeEvent::UserUpdated
        | AuthChangeEvent::PasswordRecovery => Decision::default(),
    }
}
