//! Session persistence owned by the Identity Service.
//!
//! The browser keeps the session in `localStorage`, the CLI in a JSON file;
//! both live in their own crates. [`MemorySessionStore`] covers tests and
//! short-lived processes.

use std::sync::{Mutex, PoisonError};

use super::types::Session;
use crate::error::AuthError;

pub trait SessionStore {
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the backing store cannot be read.
    fn load(&self) -> Result<Option<Session>, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the session cannot be written.
    fn save(&self, session: &Session) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the session cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;
}

#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { slot: Mutex::new(Some(session)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
