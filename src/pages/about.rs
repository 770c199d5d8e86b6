//! Static about page.

use leptos::prelude::*;

use crate::config::PUBLIC_ROUTE;
use crate::context::use_translate;

#[component]
pub fn AboutPage() -> impl IntoView {
    let t = use_translate();

    view! {
        <section class="about-page">
            <h1>{move || t("about")}</h1>
            <p>{move || t("about_body")}</p>
            <a href=PUBLIC_ROUTE>{move || t("welcome")}</a>
        </section>
    }
}
