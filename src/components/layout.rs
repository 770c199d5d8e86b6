//! Route shells for public and protected subtrees.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::context::use_services;
use crate::state::gate::{AuthGate, GateState};
use crate::state::session::SessionStore;
use crate::util::navigation::{BrowserLocation, Redirect};

#[component]
pub fn PublicLayout() -> impl IntoView {
    view! {
        <main class="layout layout--public">
            <Outlet/>
        </main>
    }
}

/// Activate a fresh gate against `session`. True only when the protected
/// outlet may render; a denial has already redirected through `location`.
pub fn admits(session: &SessionStore, location: &impl Redirect) -> bool {
    AuthGate::default().activate(session, location) == GateState::Allowed
}

/// Renders its nested routes only when the session holds a token; otherwise
/// leaves the app for the login route. The check runs once per mount.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = use_services().with_value(|s| s.session.clone());
    let allowed = admits(&session, &BrowserLocation);

    view! {
        <main class="layout layout--protected">
            {allowed.then(|| view! { <Outlet/> })}
        </main>
    }
}
