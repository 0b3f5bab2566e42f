//! Supabase Auth (GoTrue) REST client.
//!
//! Thin HTTP wrapper over `/auth/v1/*`. URL building and response parsing are
//! pure functions so they can be tested without a live project. The client
//! owns session persistence (through a [`SessionStore`]) and the auth event
//! hub, mirroring how the hosted JS SDK behaves.

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::collections::HashMap;

use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

use super::events::{AuthEventHub, AuthSubscription, SubscriptionId};
use super::store::SessionStore;
use super::types::{AuthChangeEvent, AuthEvent, OAuthProvider, Registration, Session, User};
use super::IdentityService;
use crate::config::SupabaseConfig;
use crate::error::AuthError;

const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseAuth<S> {
    http: reqwest::Client,
    config: SupabaseConfig,
    store: S,
    hub: AuthEventHub,
}

impl<S: SessionStore> SupabaseAuth<S> {
    /// # Errors
    ///
    /// Returns [`AuthError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: SupabaseConfig, store: S) -> Result<Self, AuthError> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config, store, hub: AuthEventHub::new() })
    }

    #[must_use]
    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Complete an OAuth or email-link redirect from the URL fragment the
    /// provider sent the browser back with.
    ///
    /// Returns `Ok(None)` when the fragment carries no tokens. Emits
    /// `SIGNED_IN`, or `PASSWORD_RECOVERY` for reset links.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] when the fragment reports an error, or
    /// the usual request errors while fetching the user.
    pub async fn recover_session_from_url(&self, fragment: &str) -> Result<Option<Session>, AuthError> {
        let Some(tokens) = parse_url_fragment(fragment)? else {
            return Ok(None);
        };
        let url = endpoint_url(&self.config.url, "user", &[])?;
        let text = self.call(Method::GET, url, Some(&tokens.access_token), None).await?;
        let user: User = serde_json::from_str(&text).map_err(|e| AuthError::Parse(e.to_string()))?;
        let kind = if tokens.kind.as_deref() == Some("recovery") {
            AuthChangeEvent::PasswordRecovery
        } else {
            AuthChangeEvent::SignedIn
        };
        let session = tokens.into_session(user, now_unix());
        tracing::info!(user_id = session.user_id(), event = kind.as_str(), "session recovered from redirect");
        self.adopt(session, kind).map(Some)
    }

    async fn call(&self, method: Method, url: Url, bearer: Option<&str>, body: Option<&Value>) -> Result<String, AuthError> {
        let mut request = self
            .http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer.unwrap_or(&self.config.anon_key));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| AuthError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| AuthError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(parse_error(status, &text));
        }
        Ok(text)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let url = endpoint_url(&self.config.url, "token", &[("grant_type", "refresh_token")])?;
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let text = self.call(Method::POST, url, None, Some(&body)).await?;
        parse_session(&text, now_unix())
    }

    /// Persist `session` and announce it.
    fn adopt(&self, session: Session, kind: AuthChangeEvent) -> Result<Session, AuthError> {
        self.store.save(&session)?;
        self.hub.emit(&AuthEvent { kind, session: Some(session.clone()) });
        Ok(session)
    }

    fn drop_session(&self) -> Result<(), AuthError> {
        self.store.clear()?;
        self.hub.emit(&AuthEvent::signed_out());
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl<S: SessionStore> IdentityService for SupabaseAuth<S> {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let url = endpoint_url(&self.config.url, "token", &[("grant_type", "password")])?;
        let body = serde_json::json!({ "email": email, "password": password });
        let text = self.call(Method::POST, url, None, Some(&body)).await?;
        let session = parse_session(&text, now_unix())?;
        tracing::info!(user_id = session.user_id(), "signed in with password");
        self.adopt(session, AuthChangeEvent::SignedIn)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Map<String, Value>,
    ) -> Result<Registration, AuthError> {
        let url = endpoint_url(&self.config.url, "signup", &[])?;
        let body = serde_json::json!({ "email": email, "password": password, "data": metadata });
        let text = self.call(Method::POST, url, None, Some(&body)).await?;
        match parse_sign_up(&text, now_unix())? {
            Registration::SignedIn(session) => {
                tracing::info!(user_id = session.user_id(), "registered and signed in");
                self.adopt(session, AuthChangeEvent::SignedIn).map(Registration::SignedIn)
            }
            pending @ Registration::ConfirmationPending(_) => {
                tracing::info!(user_id = pending.user().id.as_str(), "registered, confirmation pending");
                Ok(pending)
            }
        }
    }

    async fn sign_in_with_oauth(&self, provider: &OAuthProvider, redirect_to: &str) -> Result<String, AuthError> {
        authorize_url(&self.config.url, provider, redirect_to)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.store.load()? {
            let url = endpoint_url(&self.config.url, "logout", &[("scope", "global")])?;
            match self.call(Method::POST, url, Some(&session.access_token), None).await {
                Ok(_) => {}
                // An already-invalid token still means the user is signed out.
                Err(e) if e.is_token_rejected() => {
                    tracing::debug!(error = %e, "logout token already rejected");
                }
                Err(e) => return Err(e),
            }
        }
        self.drop_session()
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        let url = endpoint_url(&self.config.url, "recover", &[("redirect_to", redirect_to)])?;
        let body = serde_json::json!({ "email": email });
        self.call(Method::POST, url, None, Some(&body)).await?;
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.store.load()? else {
            return Ok(None);
        };
        if !session.is_expired(now_unix()) {
            return Ok(Some(session));
        }

        match self.refresh(&session.refresh_token).await {
            Ok(fresh) => self.adopt(fresh, AuthChangeEvent::TokenRefreshed).map(Some),
            Err(e) if e.is_token_rejected() => {
                tracing::warn!(error = %e, user_id = session.user_id(), "refresh rejected, dropping session");
                self.drop_session()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn on_auth_state_change(&self) -> AuthSubscription {
        self.hub.subscribe()
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.hub.unsubscribe(id);
    }
}

#[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
fn build_http_client(config: &SupabaseConfig) -> Result<reqwest::Client, AuthError> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder
        .timeout(std::time::Duration::from_secs(config.timeouts.request_secs))
        .connect_timeout(std::time::Duration::from_secs(config.timeouts.connect_secs));
    builder.build().map_err(|e| AuthError::HttpClientBuild(e.to_string()))
}

/// Seconds since the Unix epoch.
#[must_use]
pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

// =============================================================================
// URLS
// =============================================================================

fn endpoint_url(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url, AuthError> {
    let raw = format!("{}/auth/v1/{path}", base.trim_end_matches('/'));
    let parsed = if params.is_empty() { Url::parse(&raw) } else { Url::parse_with_params(&raw, params) };
    parsed.map_err(|e| AuthError::Parse(format!("invalid auth url {raw}: {e}")))
}

/// Provider authorize URL the browser is sent to for a redirect-based sign-in.
///
/// # Errors
///
/// Returns [`AuthError::Parse`] if `base` is not a valid URL.
pub fn authorize_url(base: &str, provider: &OAuthProvider, redirect_to: &str) -> Result<String, AuthError> {
    endpoint_url(base, "authorize", &[("provider", provider.as_str()), ("redirect_to", redirect_to)])
        .map(String::from)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

/// Tokens carried in a redirect fragment (`#access_token=...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    /// `type` parameter, e.g. `recovery` or `signup`.
    pub kind: Option<String>,
}

impl FragmentTokens {
    fn into_session(self, user: User, now: i64) -> Session {
        Session {
            expires_at: self.expires_at.unwrap_or(now.saturating_add(self.expires_in)),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            expires_in: self.expires_in,
            user,
        }
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_session(json: &str, now: i64) -> Result<Session, AuthError> {
    let wire: TokenResponse = serde_json::from_str(json).map_err(|e| AuthError::Parse(e.to_string()))?;
    Ok(session_from_wire(wire, now))
}

fn session_from_wire(wire: TokenResponse, now: i64) -> Session {
    let expires_in = wire.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
    Session {
        access_token: wire.access_token,
        refresh_token: wire.refresh_token,
        token_type: wire.token_type.unwrap_or_else(|| "bearer".to_owned()),
        expires_in,
        expires_at: wire.expires_at.unwrap_or(now.saturating_add(expires_in)),
        user: wire.user,
    }
}

/// Sign-up answers with a full token response when the project auto-confirms,
/// otherwise with the bare user (top level, or under `user`).
fn parse_sign_up(json: &str, now: i64) -> Result<Registration, AuthError> {
    let value: Value = serde_json::from_str(json).map_err(|e| AuthError::Parse(e.to_string()))?;
    if value.get("access_token").is_some_and(|t| !t.is_null()) {
        let wire: TokenResponse = serde_json::from_value(value).map_err(|e| AuthError::Parse(e.to_string()))?;
        return Ok(Registration::SignedIn(session_from_wire(wire, now)));
    }
    let user_value = match value.get("user") {
        Some(user) if user.is_object() => user.clone(),
        _ => value,
    };
    let user: User = serde_json::from_value(user_value).map_err(|e| AuthError::Parse(e.to_string()))?;
    Ok(Registration::ConfirmationPending(user))
}

/// Turn an error response into an [`AuthError`], preferring the most
/// descriptive field the service sent.
fn parse_error(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_owned))
        })
        .or_else(|| Some(body.trim().to_owned()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| format!("HTTP {status}"));
    AuthError::from_status(status, message)
}

/// Parse a redirect fragment. `Ok(None)` when it carries neither tokens nor an error.
///
/// # Errors
///
/// Returns [`AuthError::Provider`] when the provider reported an error and
/// [`AuthError::Parse`] when tokens are incomplete.
pub fn parse_url_fragment(fragment: &str) -> Result<Option<FragmentTokens>, AuthError> {
    let raw = fragment.trim_start_matches('#');
    let pairs: HashMap<String, String> = url::form_urlencoded::parse(raw.as_bytes()).into_owned().collect();
    let get = |key: &str| pairs.get(key).filter(|v| !v.is_empty()).cloned();

    if let Some(error) = get("error_description").or_else(|| get("error")) {
        return Err(AuthError::Provider(error));
    }
    let Some(access_token) = get("access_token") else {
        return Ok(None);
    };
    let refresh_token = get("refresh_token").ok_or_else(|| AuthError::Parse("redirect missing refresh_token".into()))?;

    Ok(Some(FragmentTokens {
        access_token,
        refresh_token,
        token_type: get("token_type").unwrap_or_else(|| "bearer".to_owned()),
        expires_in: get("expires_in").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_EXPIRES_IN_SECS),
        expires_at: get("expires_at").and_then(|v| v.parse().ok()),
        kind: get("type"),
    }))
}
