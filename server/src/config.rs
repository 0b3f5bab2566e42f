//! Server configuration from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Static site assets (stylesheets, images) served as the fallback.
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] when `PORT` is set but not a port.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("SITE_DIR").ok().as_deref())
    }

    pub(crate) fn from_values(port: Option<&str>, site_dir: Option<&str>) -> Result<Self, ServerError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let site_dir = site_dir
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map_or_else(default_site_dir, PathBuf::from);
        Ok(Self { port, site_dir })
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site")
}
