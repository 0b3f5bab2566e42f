//! Error taxonomy for identity calls.
//!
//! ERROR HANDLING
//! ==============
//! Every Identity Service failure is returned as an [`AuthError`] value; none
//! escape as panics. Callers (pages) decide how to present them. Missing UI
//! elements are not errors at all: renderers skip them silently.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced an HTTP response.
    #[error("identity service unreachable: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("identity service error ({status}): {message}")]
    Service { status: u16, message: String },
    /// Malformed input, rejected locally or by the service (400/422).
    #[error("{0}")]
    Validation(String),
    /// The identity provider bounced an OAuth or email-link redirect with an error.
    #[error("sign-in rejected by provider: {0}")]
    Provider(String),
    #[error("unexpected identity service response: {0}")]
    Parse(String),
    #[error("identity service not configured: missing {0}")]
    NotConfigured(String),
    #[error("session storage failed: {0}")]
    Storage(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

impl AuthError {
    /// Classify a non-success HTTP status returned by the Identity Service.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => Self::Validation(message),
            _ => Self::Service { status, message },
        }
    }

    /// Whether the service rejected the caller's token (as opposed to being unreachable).
    #[must_use]
    pub fn is_token_rejected(&self) -> bool {
        match self {
            Self::Service { status, .. } => matches!(status, 401 | 403 | 404),
            Self::Validation(_) => true,
            _ => false,
        }
    }
}
