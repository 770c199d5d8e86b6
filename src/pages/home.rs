//! Public home page: greeting, language and theme switches, Pokémon list.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::context::{switch_locale, toggle_theme, use_preference, use_services, use_translate};
use crate::pages::list::pokemon_list;

/// Cache key of the Pokémon list.
pub const POKEMONS_KEY: &str = "pokemons";

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_services();
    let preference = use_preference();
    let t = use_translate();

    // Pokémon list resource, served from the shared cache after the first load.
    let pokemons = LocalResource::new(move || {
        let (cache, api) = services.with_value(|s| (s.cache.clone(), s.api.clone()));
        async move { cache.fetch(POKEMONS_KEY, || api.pokemons()).await }
    });

    let to_english = Callback::new(move |_| switch_locale(services, preference, "en"));
    let to_indonesian = Callback::new(move |_| switch_locale(services, preference, "id"));
    let to_arabic = Callback::new(move |_| switch_locale(services, preference, "ar"));
    let on_toggle_theme = Callback::new(move |_| toggle_theme(services, preference));

    view! {
        <section class="home-page">
            <h1 class="home-page__title">{move || t("welcome")}</h1>
            <p>{move || t("language")} ": " {move || preference.with(|p| p.locale.clone())}</p>

            <div class="home-page__actions">
                <Button variant=ButtonVariant::Primary on_click=to_english>
                    {move || t("change_to_english")}
                </Button>
                <Button variant=ButtonVariant::Ghost on_click=to_indonesian>
                    {move || t("change_to_indonesian")}
                </Button>
                <Button variant=ButtonVariant::Secondary on_click=to_arabic>
                    {move || t("change_to_arab")}
                </Button>
            </div>

            <Button variant=ButtonVariant::Primary size=ButtonSize::Sm on_click=on_toggle_theme>
                {move || t("switch_theme")}
            </Button>

            <h2>{move || t("pokemon_list")}</h2>
            <Suspense fallback=move || view! { <p>{move || t("loading")}</p> }>
                {move || pokemons.get().map(|res| pokemon_list(res, t))}
            </Suspense>
        </section>
    }
}
