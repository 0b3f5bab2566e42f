//! Web Storage backends for the session and the PendingRedirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Identity Service keeps the session in `localStorage` so it survives
//! tabs and reloads; the PendingRedirect lives in `sessionStorage` so it dies
//! with the tab. Outside the browser (SSR, tests) storage is absent: reads
//! come back empty and writes of the redirect are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use fitcoach::identity::SessionStore;
use fitcoach::sync::REDIRECT_KEY;
use fitcoach::{AuthError, RedirectStore, Session};

pub const SESSION_KEY: &str = "fitcoach.auth.session";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Local,
    Session,
}

#[cfg(feature = "hydrate")]
fn storage(area: Area) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    let storage = match area {
        Area::Local => window.local_storage(),
        Area::Session => window.session_storage(),
    };
    storage.ok().flatten()
}

/// Raw read of `key`; `None` when unset or storage is unavailable.
pub fn get_item(area: Area, key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        None
    }
}

/// # Errors
///
/// Returns a description when storage is unavailable or refuses the write
/// (quota, private mode).
pub fn set_item(area: Area, key: &str, value: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage(area).ok_or_else(|| format!("{area:?} storage unavailable"))?;
        storage.set_item(key, value).map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key, value);
        Err(format!("{area:?} storage unavailable"))
    }
}

pub fn remove_item(area: Area, key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(area) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Session persistence in `localStorage`, as JSON under [`SESSION_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        let Some(raw) = get_item(Area::Local, SESSION_KEY) else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable stored session");
                remove_item(Area::Local, SESSION_KEY);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let raw = serde_json::to_string(session).map_err(|e| AuthError::Storage(e.to_string()))?;
        set_item(Area::Local, SESSION_KEY, &raw).map_err(AuthError::Storage)
    }

    fn clear(&self) -> Result<(), AuthError> {
        remove_item(Area::Local, SESSION_KEY);
        Ok(())
    }
}

// =============================================================================
// PENDING REDIRECT
// =============================================================================

/// PendingRedirect slot in `sessionStorage` under `redirect_to`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionRedirectStore;

impl RedirectStore for SessionRedirectStore {
    fn get(&self) -> Option<String> {
        get_item(Area::Session, REDIRECT_KEY)
    }

    fn set(&self, url: &str) {
        if let Err(e) = set_item(Area::Session, REDIRECT_KEY, url) {
            tracing::warn!(error = %e, "pending redirect not saved");
        }
    }

    fn remove(&self) {
        remove_item(Area::Session, REDIRECT_KEY);
    }
}
