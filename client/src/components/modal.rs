//! `.modal-overlay` shown while its id is open in [`UiState`].

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Overlay with a close button; clicking the backdrop also closes it.
#[component]
pub fn Modal(id: &'static str, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(|u| u.toggle_modal(id, false));
    let display = move || if ui.with(|u| u.is_modal_open(id)) { "flex" } else { "none" };

    view! {
        <div id=id class="modal-overlay" style:display=display on:click=move |_| close()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Fermer" on:click=move |_| close()>"×"</button>
                <h3>{title}</h3>
                {children()}
            </div>
        </div>
    }
}

/// Button opening modal `target`.
#[component]
pub fn ModalTrigger(target: &'static str, label: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let class = if class.is_empty() { "btn btn-secondary" } else { class };
    view! {
        <button class=class on:click=move |_| ui.update(|u| u.toggle_modal(target, true))>
            {label}
        </button>
    }
}
