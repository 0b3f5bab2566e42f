//! Effect seams for the synchronizer: the document and ephemeral storage.
//!
//! Implementations are best-effort. A renderer that cannot find an element
//! skips it; a store that cannot reach storage behaves as empty.

use std::cell::RefCell;

use super::decide::AuthUiState;

/// Storage key of the PendingRedirect.
pub const REDIRECT_KEY: &str = "redirect_to";

/// The page the synchronizer runs on.
pub trait PageRenderer {
    /// Full current location (`window.location.href`).
    fn location(&self) -> String;

    /// Full-page navigation to `target` (relative or absolute).
    fn navigate(&self, target: &str);

    /// Apply the auth chrome for `state`.
    fn render_auth(&self, state: &AuthUiState);
}

/// Slot holding at most one PendingRedirect.
pub trait RedirectStore {
    fn get(&self) -> Option<String>;

    /// Replace any previous value.
    fn set(&self, url: &str);

    fn remove(&self);

    /// Read and clear in one step.
    fn take(&self) -> Option<String> {
        let value = self.get();
        if value.is_some() {
            self.remove();
        }
        value
    }
}

/// In-process redirect slot, for native front ends and tests.
#[derive(Debug, Default)]
pub struct MemoryRedirectStore {
    slot: RefCell<Option<String>>,
}

impl MemoryRedirectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RedirectStore for MemoryRedirectStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, url: &str) {
        *self.slot.borrow_mut() = Some(url.to_owned());
    }

    fn remove(&self) {
        *self.slot.borrow_mut() = None;
    }
}
