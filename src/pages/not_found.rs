//! Fallback for unmatched routes.

use leptos::prelude::*;

use crate::context::use_translate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let t = use_translate();

    view! { <p class="not-found">{move || t("not_found")}</p> }
}
