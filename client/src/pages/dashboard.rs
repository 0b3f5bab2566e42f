//! Member dashboard: greeting, weekly goals, and the two headline charts.
//! Protected; the post-login and OAuth return page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use super::stats::{Range, WEEK_ACTIVITY, week_activity_chart, weight_chart};
use crate::components::chart::ChartCanvas;
use crate::components::nav::{LogoutButton, NavBar, UserEmail};
use crate::components::protected::Protected;
use crate::state::auth::Gate;
use crate::util::format::format_date;

const WEEKLY_GOAL_MINUTES: f64 = 300.0;
const NEXT_SESSION: &str = "2026-10-20T18:30:00Z";

/// Percentage of `goal` reached, capped at 100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn goal_percent(done: f64, goal: f64) -> u8 {
    if goal <= 0.0 || !done.is_finite() {
        return 0;
    }
    (done / goal * 100.0).clamp(0.0, 100.0).round() as u8
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="app-page">
            <Protected>
                <DashboardContent/>
            </Protected>
        </main>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let gate = expect_context::<RwSignal<Gate>>();
    let greeting = move || {
        gate.with(|g| {
            let name = g
                .session()
                .and_then(|s| s.user.user_metadata.get("full_name"))
                .and_then(|v| v.as_str())
                .map(str::to_owned);
            name.map_or_else(|| "Bonjour !".to_owned(), |n| format!("Bonjour, {n} !"))
        })
    };

    let minutes: f64 = WEEK_ACTIVITY.iter().sum();
    let percent = goal_percent(minutes, WEEKLY_GOAL_MINUTES);
    let sessions = WEEK_ACTIVITY.iter().filter(|m| **m > 0.0).count();

    view! {
        <header class="page-header">
            <h1>{greeting}</h1>
            <UserEmail/>
            <LogoutButton/>
        </header>
        <section class="dashboard-summary">
            <div class="card">
                <h3>"Objectif hebdomadaire"</h3>
                <p>{format!("{minutes} / {WEEKLY_GOAL_MINUTES} min")}</p>
                <div class="progress-bar">
                    <div class="progress-fill" data-width=percent.to_string()></div>
                </div>
            </div>
            <div class="card">
                <h3>"Séances cette semaine"</h3>
                <p class="stat-number">{sessions}</p>
            </div>
            <div class="card">
                <h3>"Prochaine séance"</h3>
                <p>{format_date(NEXT_SESSION).unwrap_or_default()}</p>
            </div>
        </section>
        <section class="card chart-card">
            <h2>"Progression"</h2>
            <ChartCanvas id="progress-chart" spec=Signal::stored(weight_chart(Range::Month))/>
        </section>
        <section class="card chart-card">
            <h2>"Activité"</h2>
            <ChartCanvas id="activity-chart" spec=Signal::stored(week_activity_chart())/>
        </section>
        <p class="page-links"><a href="stats.html">"Toutes les statistiques"</a>" · "<a href="settings.html">"Paramètres"</a></p>
    }
}
