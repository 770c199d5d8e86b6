//! Protected admin page listing users with the session's bearer token.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::config::AUTH_ROUTE;
use crate::context::{use_services, use_translate};
use crate::pages::list::user_list;
use crate::util::navigation::{BrowserLocation, Redirect};

/// Cache key of the user list.
pub const USERS_KEY: &str = "users";

#[component]
pub fn AdminPage() -> impl IntoView {
    let services = use_services();
    let t = use_translate();

    let users = LocalResource::new(move || {
        let (cache, api, token) =
            services.with_value(|s| (s.cache.clone(), s.api.clone(), s.session.token().unwrap_or_default()));
        async move { cache.fetch(USERS_KEY, || api.users(token)).await }
    });

    // Logout drops the token and the cached list, then leaves the app.
    let on_logout = Callback::new(move |_| {
        services.with_value(|s| {
            s.session.clear_token();
            s.cache.invalidate(USERS_KEY);
        });
        BrowserLocation.redirect(AUTH_ROUTE);
    });

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <h1>{move || t("users")}</h1>
                <Button variant=ButtonVariant::Secondary on_click=on_logout>
                    {move || t("logout")}
                </Button>
            </header>
            <Suspense fallback=move || view! { <p>{move || t("loading")}</p> }>
                {move || users.get().map(|res| user_list(res, t))}
            </Suspense>
        </section>
    }
}
