//! Form status shared by the auth pages.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use fitcoach::AuthError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Busy,
    Error(String),
    Info(String),
}

impl FormStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error(m) | Self::Info(m) => Some(m),
            Self::Idle | Self::Busy => None,
        }
    }

    /// CSS modifier for the message line.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Error(_) => "form-message form-message--error",
            Self::Info(_) => "form-message form-message--info",
            Self::Idle | Self::Busy => "form-message",
        }
    }
}

/// User-facing French text for an identity failure.
pub fn error_message(error: &AuthError) -> String {
    match error {
        AuthError::Network(_) => "Impossible de joindre le service. Vérifiez votre connexion.".to_owned(),
        AuthError::Validation(detail) | AuthError::Provider(detail) => format!("Erreur : {detail}"),
        AuthError::Service { status: 429, .. } => "Trop de tentatives. Réessayez dans quelques minutes.".to_owned(),
        AuthError::Service { message, .. } => format!("Erreur : {message}"),
        AuthError::NotConfigured(_) | AuthError::HttpClientBuild(_) => {
            crate::auth::MSG_AUTH_UNAVAILABLE.to_owned()
        }
        AuthError::Parse(_) | AuthError::Storage(_) => "Une erreur inattendue est survenue.".to_owned(),
    }
}

/// The app's synchronizer, or `None` with the unavailable message shown.
#[cfg(feature = "hydrate")]
pub fn require_sync(
    handle: crate::auth::AuthHandle,
    status: leptos::prelude::RwSignal<FormStatus>,
) -> Option<std::rc::Rc<crate::auth::BrowserSync>> {
    use leptos::prelude::Set;

    let sync = handle.sync();
    if sync.is_none() {
        status.set(FormStatus::Error(crate::auth::MSG_AUTH_UNAVAILABLE.to_owned()));
    }
    sync
}
