//! Session synchronization: auth events in, UI and navigation out.
//!
//! ARCHITECTURE
//! ============
//! - `decide`: pure transition function, no effects.
//! - `synchronizer`: identity operations and application of decisions.
//! - `context`: the subscription owner and event pump.
//! - `env`: renderer and redirect-store seams.
//! - `location`: href parsing helpers.

pub mod context;
pub mod decide;
pub mod env;
pub mod location;
pub mod synchronizer;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::AuthContext;
pub use decide::{AuthUiState, Decision, PageContext, decide};
pub use env::{MemoryRedirectStore, PageRenderer, REDIRECT_KEY, RedirectStore};
pub use location::{origin, page_id, page_url};
pub use synchronizer::SessionSynchronizer;
