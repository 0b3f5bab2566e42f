use futures::FutureExt;

use super::*;
use crate::identity::types::AuthChangeEvent;

#[tokio::test]
async fn subscribers_receive_events_in_emission_order() {
    let hub = AuthEventHub::new();
    let mut sub = hub.subscribe();

    hub.emit(&AuthEvent::signed_out());
    hub.emit(&AuthEvent { kind: AuthChangeEvent::TokenRefreshed, session: None });

    assert_eq!(sub.next().await.map(|e| e.kind), Some(AuthChangeEvent::SignedOut));
    assert_eq!(sub.next().await.map(|e| e.kind), Some(AuthChangeEvent::TokenRefreshed));
}

#[tokio::test]
async fn every_subscriber_gets_its_own_copy() {
    let hub = AuthEventHub::new();
    let mut first = hub.subscribe();
    let mut second = hub.subscribe();
    assert_ne!(first.id(), second.id());

    hub.emit(&AuthEvent::signed_out());

    assert!(first.next().await.is_some());
    assert!(second.next().await.is_some());
}

#[tokio::test]
async fn unsubscribe_ends_the_stream_after_draining() {
    let hub = AuthEventHub::new();
    let mut sub = hub.subscribe();
    hub.emit(&AuthEvent::signed_out());
    hub.unsubscribe(sub.id());

    assert_eq!(hub.subscriber_count(), 0);
    assert!(sub.next().await.is_some());
    assert!(sub.next().await.is_none());
}

#[test]
fn no_event_pending_before_emit() {
    let hub = AuthEventHub::new();
    let mut sub = hub.subscribe();
    assert!(sub.next().now_or_never().is_none());
}

#[test]
fn dropped_subscriptions_are_pruned_on_emit() {
    let hub = AuthEventHub::new();
    let sub = hub.subscribe();
    let _kept = hub.subscribe();
    drop(sub);

    hub.emit(&AuthEvent::signed_out());
    assert_eq!(hub.subscriber_count(), 1);
}
