//! Login page: email + password, OAuth providers, and password reset.
//!
//! Successful sign-in is not handled here: the `SIGNED_IN` event reaches the
//! synchronizer, which sends the user to the PendingRedirect or the dashboard.

use fitcoach::identity::OAuthProvider;
use leptos::prelude::*;

use super::feedback::FormStatus;
use crate::auth::AuthHandle;
use crate::components::field::ValidatedInput;
use crate::components::nav::NavBar;
use crate::util::validation::{FieldKind, check_email, check_login};

pub const MSG_SIGNING_IN: &str = "Connexion en cours…";
pub const MSG_RESET_SENT: &str = "Un email de réinitialisation vous a été envoyé.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(FormStatus::is_busy) {
            return;
        }
        let (email_value, password_value) = match check_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                status.set(FormStatus::Error(message.to_owned()));
                return;
            }
        };
        status.set(FormStatus::Busy);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(sync) = super::feedback::require_sync(handle, status) else {
                return;
            };
            match sync.login_with_email(&email_value, &password_value).await {
                Ok(_) => {
                    status.set(FormStatus::Info(MSG_SIGNING_IN.to_owned()));
                    sync.enter_dashboard();
                }
                Err(e) => status.set(FormStatus::Error(super::feedback::error_message(&e))),
            }
        });
    };

    let on_forgot = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let email_value = match check_email(&email.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                status.set(FormStatus::Error(message.to_owned()));
                return;
            }
        };
        status.set(FormStatus::Busy);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(sync) = super::feedback::require_sync(handle, status) else {
                return;
            };
            match sync.reset_password(&email_value).await {
                Ok(()) => status.set(FormStatus::Info(MSG_RESET_SENT.to_owned())),
                Err(e) => status.set(FormStatus::Error(super::feedback::error_message(&e))),
            }
        });
    };

    view! {
        <NavBar/>
        <main class="auth-page">
            <div class="auth-card card">
                <h1>"Connexion"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <ValidatedInput
                        id="email"
                        label="Email"
                        kind=FieldKind::Email { required: true }
                        value=email
                        placeholder="vous@exemple.com"
                    />
                    <ValidatedInput
                        id="password"
                        label="Mot de passe"
                        kind=FieldKind::Password { min_len: 1 }
                        value=password
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || status.get().is_busy()>
                        "Se connecter"
                    </button>
                </form>
                <a href="#" class="forgot-link" on:click=on_forgot>"Mot de passe oublié ?"</a>
                <FormMessage status=status/>
                <div class="oauth-buttons">
                    <OAuthButton provider=OAuthProvider::Google label="Continuer avec Google" status=status/>
                    <OAuthButton provider=OAuthProvider::Apple label="Continuer avec Apple" status=status/>
                </div>
                <p class="auth-switch">"Pas encore de compte ? " <a href="register.html">"Inscription"</a></p>
            </div>
        </main>
    }
}

/// Starts the provider's redirect flow; the page is left on success.
#[component]
pub fn OAuthButton(provider: OAuthProvider, label: &'static str, status: RwSignal<FormStatus>) -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let class = format!("btn btn-oauth btn-oauth--{}", provider.as_str());

    let on_click = move |_| {
        if status.with_untracked(FormStatus::is_busy) {
            return;
        }
        status.set(FormStatus::Busy);

        #[cfg(feature = "hydrate")]
        {
            let provider = provider.clone();
            leptos::task::spawn_local(async move {
                let Some(sync) = super::feedback::require_sync(handle, status) else {
                    return;
                };
                if let Err(e) = sync.login_with_oauth(&provider).await {
                    status.set(FormStatus::Error(super::feedback::error_message(&e)));
                }
            });
        }
    };

    view! {
        <button type="button" class=class disabled=move || status.get().is_busy() on:click=on_click>
            {label}
        </button>
    }
}

/// Error or info line under a form.
#[component]
pub fn FormMessage(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <p class=move || status.get().class() role="status">
            {move || status.get().message().unwrap_or_default().to_owned()}
        </p>
    }
}
