//! Identity Service seam and its Supabase implementation.
//!
//! DESIGN
//! ======
//! The synchronizer only ever talks to [`IdentityService`]. Futures are
//! `?Send` because the browser transport (`fetch`) is single-threaded; the
//! native CLI drives them on a current-thread runtime.

pub mod events;
pub mod store;
pub mod supabase;
pub mod types;

use serde_json::{Map, Value};

pub use events::{AuthEventHub, AuthSubscription, SubscriptionId};
pub use store::{MemorySessionStore, SessionStore};
pub use supabase::SupabaseAuth;
pub use types::{AuthChangeEvent, AuthEvent, OAuthProvider, Registration, Session, User};

use crate::error::AuthError;

/// Hosted identity backend: credentials, sessions, and state-change notifications.
#[async_trait::async_trait(?Send)]
pub trait IdentityService {
    /// Exchange email + password for a session. Emits `SIGNED_IN` on success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] for rejected credentials or an unreachable service.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Create an identity carrying `metadata`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the service refuses the registration.
    async fn sign_up(&self, email: &str, password: &str, metadata: Map<String, Value>)
    -> Result<Registration, AuthError>;

    /// Build the provider authorize URL for a redirect-based flow.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Parse`] if the URL cannot be formed.
    async fn sign_in_with_oauth(&self, provider: &OAuthProvider, redirect_to: &str) -> Result<String, AuthError>;

    /// End the current session. Emits `SIGNED_OUT` on success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the service could not be told; local state is kept.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Ask the service to email a password-reset link returning to `redirect_to`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the request fails.
    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), AuthError>;

    /// Current session, refreshed first if it has expired.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when storage or a refresh request fails.
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    /// Register a listener for state changes.
    fn on_auth_state_change(&self) -> AuthSubscription;

    fn unsubscribe(&self, id: SubscriptionId);
}
