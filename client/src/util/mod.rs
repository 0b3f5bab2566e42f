//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Everything outside `observe` builds
//! and tests without a browser.

pub mod chart;
pub mod color;
pub mod counter;
pub mod debounce;
pub mod format;
#[cfg(feature = "hydrate")]
pub mod observe;
pub mod scroll;
pub mod validation;
