//! `.stat-number` that counts up once it is half visible.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::counter::{COUNTER_THRESHOLD, COUNTER_TICK_MS, next_count};

#[component]
pub fn StatCounter(target: u64, label: &'static str, #[prop(optional)] suffix: &'static str) -> impl IntoView {
    let shown = RwSignal::new(0_u64);
    let node = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let Some(span) = node.get() else {
            return;
        };
        let element: web_sys::Element = (**span).clone();
        crate::util::observe::observe_once(&[element], COUNTER_THRESHOLD, "0px", move |_| {
            leptos::task::spawn_local(count_up(shown, target));
        });
    });

    view! {
        <div class="stat-item">
            <span class="stat-number" data-target=target.to_string() node_ref=node>
                {move || shown.get()}
                {suffix}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn count_up(shown: RwSignal<u64>, target: u64) {
    let mut current = shown.get_untracked();
    while let Some(next) = next_count(current, target) {
        gloo_timers::future::TimeoutFuture::new(COUNTER_TICK_MS).await;
        current = next;
        shown.set(current);
    }
}
