//! Page renderer backed by Leptos signals and `window.location`.
//!
//! Auth chrome is reactive: rendering means writing the [`AuthState`] signal
//! that the nav button and email display read. Navigation is a full-page
//! location assignment, matching how the static site moved between pages.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use fitcoach::{AuthUiState, PageRenderer};
use leptos::prelude::*;

use crate::state::auth::AuthState;

#[derive(Clone, Copy)]
pub struct SignalRenderer {
    auth: RwSignal<AuthState>,
}

impl SignalRenderer {
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        Self { auth }
    }
}

impl PageRenderer for SignalRenderer {
    fn location(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().href().ok()).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn navigate(&self, target: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().set_href(target) {
                tracing::warn!(%target, error = ?e, "navigation failed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            tracing::debug!(%target, "navigation skipped outside the browser");
        }
    }

    fn render_auth(&self, state: &AuthUiState) {
        self.auth.set(AuthState::rendered(state.clone()));
    }
}
