//! Application-lifetime owner of the auth event subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at startup. `start` subscribes to the Identity Service before
//! the page-load session check so no event is missed; `listener` is the pump
//! the host spawns on its UI task; `shutdown` (or drop) unsubscribes, which
//! lets the pump drain what was already emitted and return.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::env::{PageRenderer, RedirectStore};
use super::synchronizer::SessionSynchronizer;
use crate::identity::{AuthSubscription, IdentityService, SubscriptionId};

pub struct AuthContext<I, P, S>
where
    I: IdentityService,
    P: PageRenderer,
    S: RedirectStore,
{
    sync: Rc<SessionSynchronizer<I, P, S>>,
    subscription: RefCell<Option<AuthSubscription>>,
    subscription_id: SubscriptionId,
    closed: Cell<bool>,
}

impl<I, P, S> AuthContext<I, P, S>
where
    I: IdentityService,
    P: PageRenderer,
    S: RedirectStore,
{
    /// Subscribe, then derive the initial UI state from one session check
    /// (skipped on login/registration pages). Takes the synchronizer by value
    /// or already shared, so pages can hold it before startup finishes.
    pub async fn start(sync: impl Into<Rc<SessionSynchronizer<I, P, S>>>) -> Self {
        let sync = sync.into();
        let subscription = sync.identity().on_auth_state_change();
        let subscription_id = subscription.id();
        let ctx = Self {
            sync,
            subscription: RefCell::new(Some(subscription)),
            subscription_id,
            closed: Cell::new(false),
        };

        if ctx.sync.on_auth_page() {
            tracing::debug!(page = %ctx.sync.current_page(), "auth page, skipping session check");
        } else {
            ctx.sync.check_session().await;
        }
        ctx
    }

    #[must_use]
    pub fn synchronizer(&self) -> Rc<SessionSynchronizer<I, P, S>> {
        Rc::clone(&self.sync)
    }

    /// Event pump. Only the first call gets the subscription; later calls
    /// return a future that completes immediately.
    pub fn listener(&self) -> LocalBoxFuture<'static, ()>
    where
        I: 'static,
        P: 'static,
        S: 'static,
    {
        let sync = Rc::clone(&self.sync);
        let subscription = self.subscription.borrow_mut().take();
        async move {
            let Some(mut subscription) = subscription else {
                return;
            };
            while let Some(event) = subscription.next().await {
                tracing::debug!(event = event.kind.as_str(), "auth event received");
                sync.handle_event(&event);
            }
            tracing::debug!("auth listener stopped");
        }
        .boxed_local()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Unsubscribe from the Identity Service. Idempotent.
    pub fn shutdown(&self) {
        if self.closed.replace(true) {
            return;
        }
        self.sync.identity().unsubscribe(self.subscription_id);
        self.subscription.borrow_mut().take();
        tracing::debug!("auth context shut down");
    }
}

impl<I, P, S> Drop for AuthContext<I, P, S>
where
    I: IdentityService,
    P: PageRenderer,
    S: RedirectStore,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}
