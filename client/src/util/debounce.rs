//! Trailing-edge debounce for input handlers.
//!
//! Each call bumps a generation counter and schedules the action after the
//! wait; only the call whose generation is still current when the timer
//! fires runs.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default wait for field feedback while typing, in milliseconds.
pub const INPUT_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every pending call.
    pub fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == generation
    }

    /// Run `action` after `wait_ms` unless another call arrives first.
    /// Without a browser the action runs immediately.
    pub fn call<F>(&self, wait_ms: u32, action: F)
    where
        F: FnOnce() + 'static,
    {
        let generation = self.bump();
        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(wait_ms).await;
                if this.is_current(generation) {
                    action();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = wait_ms;
            if self.is_current(generation) {
                action();
            }
        }
    }
}
