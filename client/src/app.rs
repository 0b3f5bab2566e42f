//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::install;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage, settings::SettingsPage,
    stats::StatsPage,
};
use crate::state::{auth::AuthState, ui::UiState};

pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth, UI chrome, and the auth handle as contexts, starts the
/// session synchronizer, and sets up routing for the site's pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);
    provide_context(install(auth));

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| lock_body_scroll(ui.with(UiState::scroll_locked)));
        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ui.update(|u| {
                    u.close_all_modals();
                });
            }
        });
        on_cleanup(move || escape.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/fitcoach.css"/>
        <Script src=CHART_JS_SRC/>
        <Title text="FitCoach Pro"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("index.html") view=HomePage/>
                <Route path=StaticSegment("login.html") view=LoginPage/>
                <Route path=StaticSegment("register.html") view=RegisterPage/>
                <Route path=StaticSegment("dashboard.html") view=DashboardPage/>
                <Route path=StaticSegment("stats.html") view=StatsPage/>
                <Route path=StaticSegment("settings.html") view=SettingsPage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let overflow = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        tracing::debug!(error = ?e, "body overflow not updated");
    }
}
