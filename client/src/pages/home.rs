//! Public landing page: hero, headline counters, features, coaches,
//! programmes, and pricing.

use leptos::prelude::*;

use crate::components::modal::{Modal, ModalTrigger};
use crate::components::nav::NavBar;
use crate::components::stat_counter::StatCounter;
use crate::util::format::format_currency;

struct Coach {
    id: &'static str,
    name: &'static str,
    specialty: &'static str,
    bio: &'static str,
}

static COACHES: [Coach; 3] = [
    Coach {
        id: "coach-modal-lea",
        name: "Léa Martin",
        specialty: "Musculation",
        bio: "Dix ans de préparation physique, spécialiste de la prise de force.",
    },
    Coach {
        id: "coach-modal-karim",
        name: "Karim Benali",
        specialty: "HIIT & cardio",
        bio: "Ancien athlète de haut niveau, il construit des séances courtes et intenses.",
    },
    Coach {
        id: "coach-modal-sofia",
        name: "Sofia Rossi",
        specialty: "Mobilité & yoga",
        bio: "Elle accompagne la récupération et la prévention des blessures.",
    },
];

static FEATURES: [(&str, &str); 3] = [
    ("Programmes sur mesure", "Un plan adapté à votre niveau et à vos objectifs."),
    ("Suivi de progression", "Graphiques de poids, de performances et d'activité."),
    ("Coachs certifiés", "Des professionnels disponibles pour vous guider."),
];

static PROGRAMS: [(&str, u8); 3] = [("Perte de poids", 85), ("Prise de masse", 70), ("Remise en forme", 95)];

static PLANS: [(&str, f64); 3] = [("Essentiel", 19.99), ("Premium", 39.99), ("Coaching privé", 1_249.0)];

#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| crate::util::scroll::install_page_effects());

    let features = FEATURES
        .iter()
        .map(|&(title, text)| {
            view! {
                <div class="feature-card">
                    <h3>{title}</h3>
                    <p>{text}</p>
                </div>
            }
        })
        .collect_view();

    let coaches = COACHES
        .iter()
        .map(|coach| {
            view! {
                <div class="coach-card">
                    <h3>{coach.name}</h3>
                    <p class="coach-specialty">{coach.specialty}</p>
                    <ModalTrigger target=coach.id label="Voir le profil"/>
                </div>
                <Modal id=coach.id title=coach.name>
                    <p class="coach-specialty">{coach.specialty}</p>
                    <p>{coach.bio}</p>
                </Modal>
            }
        })
        .collect_view();

    let programs = PROGRAMS
        .iter()
        .map(|&(name, rate)| {
            view! {
                <div class="program-card">
                    <h3>{name}</h3>
                    <p>{format!("{rate} % de réussite")}</p>
                    <div class="progress-bar">
                        <div class="progress-fill" data-width=rate.to_string()></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let plans = PLANS
        .iter()
        .map(|&(name, price)| {
            view! {
                <div class="card pricing-card">
                    <h3>{name}</h3>
                    <p class="price">{format_currency(price)}<span>" / mois"</span></p>
                    <a href="register.html" class="btn btn-primary">"Commencer"</a>
                </div>
            }
        })
        .collect_view();

    view! {
        <NavBar/>
        <main>
            <section class="hero">
                <h1 class="animate-up">"Dépassez vos limites"</h1>
                <p class="animate-up">"Le coaching sportif en ligne qui s'adapte à vous."</p>
                <a href="register.html" class="btn btn-primary animate-up">"Essai gratuit"</a>
            </section>
            <section class="stats">
                <StatCounter target=1500 label="Membres actifs"/>
                <StatCounter target=25 label="Coachs certifiés"/>
                <StatCounter target=98 label="Clients satisfaits" suffix="%"/>
            </section>
            <section id="features" class="features">
                <h2>"Fonctionnalités"</h2>
                <div class="grid">{features}</div>
            </section>
            <section id="coachs" class="coaches">
                <h2>"Nos coachs"</h2>
                <div class="grid">{coaches}</div>
            </section>
            <section id="programmes" class="programs">
                <h2>"Programmes"</h2>
                <div class="grid">{programs}</div>
            </section>
            <section id="tarifs" class="pricing">
                <h2>"Tarifs"</h2>
                <div class="grid">{plans}</div>
            </section>
        </main>
        <footer class="site-footer">
            <p>"© FitCoach Pro"</p>
        </footer>
    }
}
