//! Typed configuration for the Supabase project and the site's page layout.
//!
//! Native binaries read these from the environment; the browser build bakes the
//! Supabase values in at compile time (see `client::config`).

use crate::error::AuthError;

pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Pages that require a session on the stock site.
pub const DEFAULT_PROTECTED_PAGES: [&str; 6] = [
    "dashboard.html",
    "program.html",
    "stats.html",
    "messages.html",
    "profile.html",
    "settings.html",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for AuthTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_AUTH_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_AUTH_CONNECT_TIMEOUT_SECS }
    }
}

/// Connection details for the hosted Supabase project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public anon key sent as `apikey` on every request.
    pub anon_key: String,
    pub timeouts: AuthTimeouts,
}

impl SupabaseConfig {
    #[must_use]
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            url: url.trim().trim_end_matches('/').to_owned(),
            anon_key: anon_key.trim().to_owned(),
            timeouts: AuthTimeouts::default(),
        }
    }

    /// Build from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    ///
    /// Optional:
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotConfigured`] naming the first missing variable.
    pub fn from_env() -> Result<Self, AuthError> {
        let url = non_empty_env("SUPABASE_URL").ok_or_else(|| AuthError::NotConfigured("SUPABASE_URL".into()))?;
        let anon_key =
            non_empty_env("SUPABASE_ANON_KEY").ok_or_else(|| AuthError::NotConfigured("SUPABASE_ANON_KEY".into()))?;
        let mut config = Self::new(&url, &anon_key);
        config.timeouts = AuthTimeouts {
            request_secs: env_parse_u64("AUTH_REQUEST_TIMEOUT_SECS", DEFAULT_AUTH_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("AUTH_CONNECT_TIMEOUT_SECS", DEFAULT_AUTH_CONNECT_TIMEOUT_SECS),
        };
        Ok(config)
    }
}

/// Page identifiers (last path segment) the synchronizer navigates between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePages {
    /// Public landing page, target after sign-out.
    pub landing: String,
    pub login: String,
    pub register: String,
    /// Post-login home; also the OAuth return page.
    pub dashboard: String,
    /// Password-reset return page.
    pub settings: String,
    /// Pages that send the user to `landing` on sign-out. Pages calling
    /// `protect_private_page` are treated as protected even when absent here.
    pub protected: Vec<String>,
}

impl Default for SitePages {
    fn default() -> Self {
        Self {
            landing: "index.html".to_owned(),
            login: "login.html".to_owned(),
            register: "register.html".to_owned(),
            dashboard: "dashboard.html".to_owned(),
            settings: "settings.html".to_owned(),
            protected: DEFAULT_PROTECTED_PAGES.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

impl SitePages {
    /// Defaults, with the protected list overridable via
    /// `FITCOACH_PROTECTED_PAGES` (comma-separated page names).
    #[must_use]
    pub fn from_env() -> Self {
        match non_empty_env("FITCOACH_PROTECTED_PAGES") {
            Some(raw) => Self::default().with_protected_list(&raw),
            None => Self::default(),
        }
    }

    /// Replace the protected list with a comma-separated list of page names.
    #[must_use]
    pub fn with_protected_list(mut self, raw: &str) -> Self {
        self.protected = parse_page_list(raw);
        self
    }

    #[must_use]
    pub fn is_protected(&self, page: &str) -> bool {
        self.protected.iter().any(|p| p == page)
    }

    /// Login and registration pages skip the page-load session check.
    #[must_use]
    pub fn is_auth_page(&self, page: &str) -> bool {
        page == self.login || page == self.register
    }
}

fn parse_page_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
