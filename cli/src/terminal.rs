//! Page renderer for the terminal.
//!
//! The CLI plays one page of the site at a time. Navigation does not leave
//! the process: it is printed and becomes the new location, so a follow-up
//! decision sees where the browser would be.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;

use fitcoach::sync::page_url;
use fitcoach::{AuthUiState, PageRenderer};

pub struct TerminalRenderer {
    location: RefCell<String>,
}

impl TerminalRenderer {
    pub fn new(location: &str) -> Self {
        Self { location: RefCell::new(location.to_owned()) }
    }
}

/// One-line summary of the auth chrome.
pub fn describe(state: &AuthUiState) -> String {
    match state {
        AuthUiState::Authenticated { email: Some(email) } => format!("signed in as {email}"),
        AuthUiState::Authenticated { email: None } => "signed in".to_owned(),
        AuthUiState::Unauthenticated => "signed out".to_owned(),
    }
}

impl PageRenderer for TerminalRenderer {
    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn navigate(&self, target: &str) {
        println!("-> {target}");
        let next = if target.contains("://") {
            target.to_owned()
        } else {
            page_url(&self.location.borrow(), target)
        };
        *self.location.borrow_mut() = next;
    }

    fn render_auth(&self, state: &AuthUiState) {
        println!("{}", describe(state));
    }
}
