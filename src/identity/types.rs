//! Identity DTOs shared by the Supabase client, the synchronizer, and the pages.
//!
//! DESIGN
//! ======
//! `Session` and `User` mirror the GoTrue JSON shapes closely enough that the
//! persisted form round-trips through `serde` unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Seconds before `expires_at` at which a session counts as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 10;

/// An identity as known to the Identity Service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Primary email, absent for some OAuth identities.
    #[serde(default)]
    pub email: Option<String>,
    /// Arbitrary key-value data attached at sign-up (e.g. `full_name`).
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
}

/// Token bundle for an authenticated identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime granted at issue time, in seconds.
    pub expires_in: i64,
    /// Absolute expiry, seconds since the Unix epoch.
    pub expires_at: i64,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref()
    }

    /// Whether the access token is expired (or about to be) at `now`.
    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.saturating_sub(EXPIRY_MARGIN_SECS) <= now
    }
}

/// Auth state-change tags emitted by the Identity Service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

impl AuthChangeEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialSession => "INITIAL_SESSION",
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
            Self::UserUpdated => "USER_UPDATED",
            Self::PasswordRecovery => "PASSWORD_RECOVERY",
        }
    }
}

/// One emission of the auth state-change stream.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthEvent {
    pub kind: AuthChangeEvent,
    pub session: Option<Session>,
}

impl AuthEvent {
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { kind: AuthChangeEvent::SignedIn, session: Some(session) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { kind: AuthChangeEvent::SignedOut, session: None }
    }
}

/// Outcome of a successful sign-up.
#[derive(Clone, Debug, PartialEq)]
pub enum Registration {
    /// The project auto-confirms; the new identity is signed in.
    SignedIn(Session),
    /// The backend sent a confirmation email; no session until it is followed.
    ConfirmationPending(User),
}

impl Registration {
    #[must_use]
    pub fn user(&self) -> &User {
        match self {
            Self::SignedIn(session) => &session.user,
            Self::ConfirmationPending(user) => user,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            Self::ConfirmationPending(_) => None,
        }
    }
}

/// OAuth provider name. The set is open: anything the project enables works.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Apple,
    Facebook,
    Other(String),
}

impl OAuthProvider {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Google => "google",
            Self::Apple => "apple",
            Self::Facebook => "facebook",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for OAuthProvider {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "google" => Self::Google,
            "apple" => Self::Apple,
            "facebook" => Self::Facebook,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl std::fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
