//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session synchronizer (through the signal renderer) and
//! read by the nav chrome and protected pages. `ready` flips once the first
//! session check, or an auth event, has rendered.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use fitcoach::{AuthUiState, Session};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub ui: AuthUiState,
    pub ready: bool,
}

impl AuthState {
    pub fn rendered(ui: AuthUiState) -> Self {
        Self { ui, ready: true }
    }

    pub fn email(&self) -> Option<&str> {
        self.ui.email()
    }
}

/// Access check a protected page performs before rendering its content.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gate {
    /// Session lookup in flight; nothing protected is shown.
    #[default]
    Checking,
    Allowed(Session),
    /// No session: the browser is on its way to the login page.
    Redirecting,
}

impl Gate {
    pub fn from_lookup(session: Option<Session>) -> Self {
        session.map_or(Self::Redirecting, Self::Allowed)
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Allowed(session) => Some(session),
            Self::Checking | Self::Redirecting => None,
        }
    }
}
