//! Reactive state containers provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each state in an `RwSignal` and provides it once; pages and
//! components read it with `expect_context`.

pub mod auth;
pub mod ui;
