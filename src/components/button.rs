//! Button primitive with variants, sizes and a loading spinner.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Secondary => "btn--secondary",
            Self::Ghost => "btn--ghost",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn--sm",
            Self::Md => "btn--md",
            Self::Lg => "btn--lg",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Class list for a button: base, variant, size, width, then `extra`.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool, extra: &str) -> String {
    let mut classes = vec!["btn", variant.class(), size.class()];
    if full_width {
        classes.push("btn--full");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Clickable button. While `loading`, a spinner replaces the label; while
/// `disabled`, clicks are swallowed.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(into, optional)] loading: Signal<bool>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] button_type: ButtonType,
    #[prop(into, optional)] class: String,
    #[prop(optional)] icon_left: Option<ViewFn>,
    #[prop(optional)] icon_right: Option<ViewFn>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
) -> impl IntoView {
    let handle_click = move |ev: leptos::ev::MouseEvent| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(cb) = on_click {
            cb.run(ev);
        }
    };

    view! {
        <button
            type=button_type.as_str()
            class=button_class(variant, size, full_width, &class)
            disabled=move || disabled.get()
            aria-disabled=move || disabled.get().to_string()
            aria-busy=move || loading.get().to_string()
            on:click=handle_click
        >
            {icon_left.map(|icon| view! { <span class="btn__icon btn__icon--left">{icon.run()}</span> })}
            <Show when=move || loading.get()>
                <svg class="btn__spinner" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                    <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path d="M4 12a8 8 0 018-8" stroke="currentColor" stroke-width="4"></path>
                </svg>
            </Show>
            <span class="btn__label" hidden=move || loading.get()>
                {children()}
            </span>
            {icon_right.map(|icon| view! { <span class="btn__icon btn__icon--right">{icon.run()}</span> })}
        </button>
    }
}
