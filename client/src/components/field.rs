//! Form input whose border reflects its validity while typing.

use leptos::prelude::*;

use crate::util::debounce::{Debouncer, INPUT_DEBOUNCE_MS};
use crate::util::validation::{FieldKind, FieldState, field_state};

#[component]
pub fn ValidatedInput(
    id: &'static str,
    label: &'static str,
    kind: FieldKind,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(FieldState::Neutral);
    let debouncer = Debouncer::new();
    let input_type = match kind {
        FieldKind::Text { .. } => "text",
        FieldKind::Email { .. } => "email",
        FieldKind::Password { .. } => "password",
    };

    let on_input = move |ev: leptos::ev::Event| {
        value.set(event_target_value(&ev));
        debouncer.call(INPUT_DEBOUNCE_MS, move || {
            state.set(value.with_untracked(|v| field_state(kind, v)));
        });
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                style:border-color=move || state.get().border_color()
                on:input=on_input
            />
        </div>
    }
}
