//! Text input primitive bound to a string signal.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
        }
    }
}

pub fn input_class(invalid: bool) -> &'static str {
    if invalid { "input input--invalid" } else { "input" }
}

#[component]
pub fn Input(
    value: RwSignal<String>,
    #[prop(optional)] kind: InputKind,
    #[prop(into, optional)] id: Option<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into, optional)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type=kind.as_str()
            id=id
            class=move || input_class(invalid.get())
            placeholder=placeholder
            disabled=move || disabled.get()
            aria-invalid=move || invalid.get().to_string()
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
