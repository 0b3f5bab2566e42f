//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap their content in
//! `components::protected::Protected`; auth forms share `feedback`.

pub mod dashboard;
pub mod feedback;
pub mod home;
pub mod login;
pub mod register;
pub mod settings;
pub mod stats;
