//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared page chrome (nav, modals, counters, charts)
//! and the protected-page gate, reading and writing shared state from Leptos
//! context providers installed by `App`.

pub mod chart;
pub mod field;
pub mod modal;
pub mod nav;
pub mod protected;
pub mod stat_counter;
