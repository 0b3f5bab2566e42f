//! Page chrome state: mobile menu and modal overlays.
//!
//! DESIGN
//! ======
//! Kept apart from auth state so the nav can animate without re-rendering
//! auth-dependent views. Body scroll is locked while any modal is open.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::BTreeSet;

// Nav links fade in 1/7 s apart, the first 0.3 s after opening.
const LINK_STAGGER_DIVISOR: f64 = 7.0;
const LINK_BASE_DELAY_SECS: f64 = 0.3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub open_modals: BTreeSet<String>,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Clicking a nav link always closes the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Show or hide the modal `id`.
    pub fn toggle_modal(&mut self, id: &str, show: bool) {
        if show {
            self.open_modals.insert(id.to_owned());
        } else {
            self.open_modals.remove(id);
        }
    }

    /// Escape handler: close everything. Returns whether anything was open.
    pub fn close_all_modals(&mut self) -> bool {
        let any = !self.open_modals.is_empty();
        self.open_modals.clear();
        any
    }

    pub fn is_modal_open(&self, id: &str) -> bool {
        self.open_modals.contains(id)
    }

    pub fn scroll_locked(&self) -> bool {
        !self.open_modals.is_empty()
    }
}

/// Fade-in delay of the `index`-th nav link when the menu opens.
#[allow(clippy::cast_precision_loss)]
pub fn nav_link_delay(index: usize) -> f64 {
    index as f64 / LINK_STAGGER_DIVISOR + LINK_BASE_DELAY_SECS
}

/// Inline `animation` for a nav link; empty while the menu is closed.
pub fn nav_link_animation(index: usize, menu_open: bool) -> String {
    if menu_open {
        format!("fadeIn 0.5s ease forwards {}s", nav_link_delay(index))
    } else {
        String::new()
    }
}
