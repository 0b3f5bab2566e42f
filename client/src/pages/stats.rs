//! Progress statistics: weight curve over a selectable range plus weekly
//! activity. Protected.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;

use crate::components::chart::ChartCanvas;
use crate::components::nav::{LogoutButton, NavBar, UserEmail};
use crate::components::protected::Protected;
use crate::util::chart::{BLUE, ChartSpec, activity_chart, progress_chart, update_chart_data};

pub const WEEK_DAYS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];
pub const WEEK_ACTIVITY: [f64; 7] = [45.0, 60.0, 0.0, 75.0, 30.0, 90.0, 20.0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Range {
    Week,
    #[default]
    Month,
    Year,
}

impl Range {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Year];

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "7 jours",
            Self::Month => "30 jours",
            Self::Year => "12 mois",
        }
    }

    /// Chart labels and weight samples (kg) for the range.
    pub fn weight_series(self) -> (Vec<String>, Vec<f64>) {
        let (labels, data): (Vec<&str>, Vec<f64>) = match self {
            Self::Week => (WEEK_DAYS.to_vec(), vec![78.4, 78.2, 78.3, 78.0, 77.9, 77.8, 77.6]),
            Self::Month => (vec!["S1", "S2", "S3", "S4"], vec![79.5, 78.9, 78.3, 77.6]),
            Self::Year => (
                vec!["Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc"],
                vec![86.0, 85.1, 84.0, 83.2, 82.5, 81.9, 81.0, 80.4, 79.8, 79.1, 78.5, 77.6],
            ),
        };
        (labels.into_iter().map(str::to_owned).collect(), data)
    }
}

pub fn weight_chart(range: Range) -> ChartSpec {
    let (labels, data) = range.weight_series();
    progress_chart(&labels, &data, "Poids (kg)", None)
}

pub fn week_activity_chart() -> ChartSpec {
    let labels: Vec<String> = WEEK_DAYS.iter().map(|d| (*d).to_owned()).collect();
    activity_chart(&labels, &WEEK_ACTIVITY)
}

/// Swap the weight chart's data for `range`, keeping its styling.
pub fn switch_range(spec: &mut ChartSpec, range: Range) {
    let (labels, data) = range.weight_series();
    let color = (range == Range::Year).then_some(BLUE);
    update_chart_data(spec, &labels, &data, None, color);
}

#[component]
pub fn StatsPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="app-page">
            <Protected>
                <StatsContent/>
            </Protected>
        </main>
    }
}

#[component]
fn StatsContent() -> impl IntoView {
    let range = RwSignal::new(Range::default());
    let weight = RwSignal::new(weight_chart(Range::default()));

    let select = move |next: Range| {
        range.set(next);
        weight.update(|spec| switch_range(spec, next));
    };

    let buttons = Range::ALL
        .into_iter()
        .map(|r| {
            view! {
                <button
                    class="btn range-btn"
                    class:active=move || range.get() == r
                    on:click=move |_| select(r)
                >
                    {r.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="page-header">
            <h1>"Statistiques"</h1>
            <UserEmail/>
            <LogoutButton/>
        </header>
        <section class="card chart-card">
            <div class="chart-header">
                <h2>"Évolution du poids"</h2>
                <div class="range-switch">{buttons}</div>
            </div>
            <ChartCanvas id="weight-chart" spec=weight/>
        </section>
        <section class="card chart-card">
            <h2>"Activité de la semaine"</h2>
            <ChartCanvas id="activity-chart" spec=Signal::stored(week_activity_chart())/>
        </section>
    }
}
