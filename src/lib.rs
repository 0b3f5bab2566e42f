//! # fitcoach
//!
//! Authentication core for the FitCoach Pro site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site delegates identity to a hosted Supabase project. This crate owns
//! the small amount of logic that sits between that service and the pages:
//!
//! - [`identity`]: the `IdentityService` seam, the Supabase Auth REST client,
//!   session persistence, and the auth event hub.
//! - [`sync`]: the session synchronizer: a pure transition function from auth
//!   events to UI/navigation decisions, and the effectful wrapper that applies
//!   them through the `PageRenderer` and `RedirectStore` seams.
//! - [`config`]: typed configuration for the Supabase project and site pages.
//!
//! The `client` crate provides browser implementations of the seams; the `cli`
//! crate provides terminal ones.

pub mod config;
pub mod error;
pub mod identity;
pub mod sync;

pub use config::{SitePages, SupabaseConfig};
pub use error::AuthError;
pub use identity::{AuthChangeEvent, AuthEvent, IdentityService, Registration, Session, User};
pub use sync::{AuthContext, AuthUiState, PageRenderer, RedirectStore, SessionSynchronizer};
