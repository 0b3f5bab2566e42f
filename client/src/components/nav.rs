//! Site header: brand, burger menu, nav links, and the auth action button.

use leptos::prelude::*;

use crate::auth::site_pages;
use crate::state::auth::AuthState;
use crate::state::ui::{UiState, nav_link_animation};
use crate::util::scroll::scroll_to_anchor;

static NAV_LINKS: [(&str, &str); 4] = [
    ("index.html#features", "Fonctionnalités"),
    ("index.html#coachs", "Coachs"),
    ("index.html#programmes", "Programmes"),
    ("index.html#tarifs", "Tarifs"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_burger = move |_| ui.update(UiState::toggle_menu);

    let links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, &(href, label))| {
            let on_link = move |ev: leptos::ev::MouseEvent| {
                ui.update(UiState::close_menu);
                if let Some((_, anchor)) = href.split_once('#')
                    && on_landing()
                    && scroll_to_anchor(&format!("#{anchor}"))
                {
                    ev.prevent_default();
                }
            };
            view! {
                <li>
                    <a
                        href=href
                        style:animation=move || nav_link_animation(index, ui.get().menu_open)
                        on:click=on_link
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <nav class="navbar">
                <a href="index.html" class="logo">"FitCoach"<span>"Pro"</span></a>
                <ul id="nav-links" class="nav-links" class:active=move || ui.get().menu_open>
                    {links}
                    <li><AuthActionButton/></li>
                </ul>
                <button
                    id="burger-toggle"
                    class="burger"
                    class:toggle=move || ui.get().menu_open
                    aria-label="Menu"
                    on:click=on_burger
                >
                    <span class="line1"></span>
                    <span class="line2"></span>
                    <span class="line3"></span>
                </button>
            </nav>
        </header>
    }
}

/// `.auth-action-btn`: "Connexion" when signed out, "Mon Dashboard" when in.
#[component]
pub fn AuthActionButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pages = site_pages();

    let href = move || auth.with(|a| a.ui.action_href(&pages).to_owned());
    let label = move || auth.with(|a| a.ui.action_label());
    let class = move || {
        let (add, _) = auth.with(|a| a.ui.action_classes());
        format!("btn auth-action-btn {add}")
    };

    view! { <a href=href class=class>{label}</a> }
}

/// `.user-email-display`: the signed-in email, empty otherwise.
#[component]
pub fn UserEmail() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = move || auth.with(|a| a.email().unwrap_or_default().to_owned());
    view! { <span class="user-email-display">{email}</span> }
}

/// `#logout-btn`: signs out and returns to the landing page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let handle = expect_context::<crate::auth::AuthHandle>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(sync) = handle.sync() {
                sync.logout().await;
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = handle;
    };

    view! {
        <button id="logout-btn" class="btn btn-secondary" disabled=move || busy.get() on:click=on_logout>
            "Déconnexion"
        </button>
    }
}

fn on_landing() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let path = web_sys::window().and_then(|w| w.location().pathname().ok()).unwrap_or_default();
        let page = fitcoach::sync::page_id(&path);
        page.is_empty() || page == site_pages().landing
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
