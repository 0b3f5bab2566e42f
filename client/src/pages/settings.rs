//! Account settings: email, password reset, sign-out. Protected; also the
//! return page of password-reset emails.

use leptos::prelude::*;

use super::feedback::FormStatus;
use super::login::{FormMessage, MSG_RESET_SENT};
use crate::auth::AuthHandle;
use crate::components::nav::{LogoutButton, NavBar, UserEmail};
use crate::components::protected::Protected;
use crate::state::auth::Gate;

pub const MSG_NO_EMAIL: &str = "Aucune adresse email n'est associée à ce compte.";

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="app-page">
            <Protected>
                <SettingsContent/>
            </Protected>
        </main>
    }
}

#[component]
fn SettingsContent() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let gate = expect_context::<RwSignal<Gate>>();
    let status = RwSignal::new(FormStatus::Idle);

    let on_reset = move |_| {
        if status.with_untracked(FormStatus::is_busy) {
            return;
        }
        let Some(email) = gate.with_untracked(|g| g.session().and_then(|s| s.email()).map(str::to_owned)) else {
            status.set(FormStatus::Error(MSG_NO_EMAIL.to_owned()));
            return;
        };
        status.set(FormStatus::Busy);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(sync) = super::feedback::require_sync(handle, status) else {
                return;
            };
            match sync.reset_password(&email).await {
                Ok(()) => status.set(FormStatus::Info(MSG_RESET_SENT.to_owned())),
                Err(e) => status.set(FormStatus::Error(super::feedback::error_message(&e))),
            }
        });
    };

    view! {
        <header class="page-header">
            <h1>"Paramètres"</h1>
        </header>
        <section class="card settings-card">
            <h2>"Compte"</h2>
            <p>"Email : " <UserEmail/></p>
        </section>
        <section class="card settings-card">
            <h2>"Sécurité"</h2>
            <p>"Recevez un lien par email pour choisir un nouveau mot de passe."</p>
            <button class="btn btn-secondary" disabled=move || status.get().is_busy() on:click=on_reset>
                "Réinitialiser le mot de passe"
            </button>
            <FormMessage status=status/>
        </section>
        <section class="card settings-card">
            <h2>"Session"</h2>
            <LogoutButton/>
        </section>
    }
}
