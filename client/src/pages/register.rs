//! Registration page: full name, email, password with confirmation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use fitcoach::Registration;
use leptos::prelude::*;
use serde_json::{Map, Value};

use super::feedback::FormStatus;
use super::login::{FormMessage, OAuthButton};
use crate::auth::AuthHandle;
use crate::components::field::ValidatedInput;
use crate::components::nav::NavBar;
use crate::util::validation::{FieldKind, MIN_PASSWORD_LEN, RegisterInput, check_register};

pub const MSG_SIGNED_UP: &str = "Compte créé ! Redirection vers votre espace…";
pub const MSG_CONFIRM_EMAIL: &str = "Compte créé ! Vérifiez votre email pour confirmer votre inscription.";

/// Profile fields stored with the new identity.
pub fn signup_metadata(input: &RegisterInput) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("full_name".to_owned(), Value::String(input.full_name.clone()));
    metadata
}

pub fn registration_message(registration: &Registration) -> &'static str {
    match registration {
        Registration::SignedIn(_) => MSG_SIGNED_UP,
        Registration::ConfirmationPending(_) => MSG_CONFIRM_EMAIL,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(FormStatus::is_busy) {
            return;
        }
        let checked = check_register(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        let input = match checked {
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
            match sync.register_with_email(&input.email, &input.password, signup_metadata(&input)).await {
                Ok(registration) => {
                    status.set(FormStatus::Info(registration_message(&registration).to_owned()));
                    if registration.session().is_some() {
                        sync.enter_dashboard();
                    }
                }
                Err(e) => status.set(FormStatus::Error(super::feedback::error_message(&e))),
            }
        });
    };

    view! {
        <NavBar/>
        <main class="auth-page">
            <div class="auth-card card">
                <h1>"Inscription"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <ValidatedInput
                        id="full-name"
                        label="Nom complet"
                        kind=FieldKind::Text { required: true }
                        value=full_name
                    />
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
                        kind=FieldKind::Password { min_len: MIN_PASSWORD_LEN }
                        value=password
                    />
                    <ValidatedInput
                        id="password-confirm"
                        label="Confirmer le mot de passe"
                        kind=FieldKind::Password { min_len: MIN_PASSWORD_LEN }
                        value=confirm
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || status.get().is_busy()>
                        "Créer mon compte"
                    </button>
                </form>
                <FormMessage status=status/>
                <div class="oauth-buttons">
                    <OAuthButton provider=fitcoach::identity::OAuthProvider::Google label="S'inscrire avec Google" status=status/>
                </div>
                <p class="auth-switch">"Déjà inscrit ? " <a href="login.html">"Connexion"</a></p>
            </div>
        </main>
    }
}
