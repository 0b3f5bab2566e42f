//! Fan-out of auth state changes to explicit subscribers.
//!
//! Each subscriber owns an unbounded channel, so events arrive in emission
//! order and none are dropped. A subscription ends when it is unsubscribed or
//! the hub is dropped; the receiver then yields `None`.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Mutex, PoisonError};

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

use super::types::AuthEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving half of an auth-state subscription.
pub struct AuthSubscription {
    id: SubscriptionId,
    rx: UnboundedReceiver<AuthEvent>,
}

impl AuthSubscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Wait for the next event; `None` once the subscription has ended.
    pub async fn next(&mut self) -> Option<AuthEvent> {
        self.rx.next().await
    }
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, UnboundedSender<AuthEvent>)>,
}

/// Registry of live subscriptions owned by an Identity Service implementation.
#[derive(Default)]
pub struct AuthEventHub {
    inner: Mutex<HubInner>,
}

impl AuthEventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> AuthSubscription {
        let (tx, rx) = unbounded();
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, tx));
        AuthSubscription { id, rx }
    }

    /// Drop the sender for `id`; its receiver drains and then ends.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Deliver `event` to every live subscriber, pruning closed ones.
    pub fn emit(&self, event: &AuthEvent) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.subscribers.retain(|(_, tx)| tx.unbounded_send(event.clone()).is_ok());
        tracing::debug!(event = event.kind.as_str(), subscribers = inner.subscribers.len(), "auth event emitted");
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).subscribers.len()
    }
}
