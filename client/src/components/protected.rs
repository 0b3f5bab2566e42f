//! Render gate for protected pages.
//!
//! Waits for auth startup, then runs `protect_private_page`. Children render
//! only once a session is confirmed; without one the synchronizer has
//! already sent the browser to the login page.

use leptos::prelude::*;

use crate::auth::AuthHandle;
use crate::state::auth::Gate;

pub const MSG_CHECKING: &str = "Vérification de la session…";
pub const MSG_REDIRECTING: &str = "Redirection vers la connexion…";

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let gate = RwSignal::new(Gate::Checking);
    provide_context(gate);

    Effect::new(move |checked: Option<bool>| {
        if checked == Some(true) || !handle.is_ready() {
            return checked.unwrap_or(false);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = match handle.sync() {
                Some(sync) => sync.protect_private_page().await,
                None => None,
            };
            gate.set(Gate::from_lookup(session));
        });
        #[cfg(not(feature = "hydrate"))]
        gate.set(Gate::Redirecting);
        true
    });

    move || match gate.get() {
        Gate::Allowed(_) => children().into_any(),
        Gate::Checking => view! { <p class="gate-status">{MSG_CHECKING}</p> }.into_any(),
        Gate::Redirecting => view! { <p class="gate-status">{MSG_REDIRECTING}</p> }.into_any(),
    }
}
