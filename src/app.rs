//! Root component: services, metadata, and the route table.
//!
//! ARCHITECTURE
//! ============
//! ```text
//! /            -> redirect to /public
//! /public      -> PublicLayout  { HomePage, about: AboutPage }
//! /auth        -> PublicLayout  { LoginPage }
//! /admin       -> ProtectedLayout { AdminPage }   (token required)
//! anything else -> NotFoundPage
//! ```

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::{ProtectedLayout, PublicLayout};
use crate::config::{AppConfig, PUBLIC_ROUTE};
use crate::context::provide_services;
use crate::pages::about::AboutPage;
use crate::pages::admin::AdminPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::state::AppServices;

/// Root application component.
///
/// Builds the browser services once and provides them to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_services(AppServices::browser(AppConfig::from_build_env()));

    view! {
        <Title text="Gatehouse"/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=PUBLIC_ROUTE/> }/>
                <ParentRoute path=StaticSegment("public") view=PublicLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("auth") view=PublicLayout>
                    <Route path=StaticSegment("") view=LoginPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("admin") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=AdminPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
