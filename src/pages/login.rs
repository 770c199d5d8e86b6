//! Login page: username/password form driving a [`LoginFlow`].
//!
//! [`LoginFlow`]: crate::state::login::LoginFlow

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonType};
use crate::components::input::{Input, InputKind};
use crate::config::PROTECTED_ROUTE;
use crate::context::{use_services, use_translate};
use crate::net::types::Credentials;
use crate::state::login::{LoginOutcome, LoginState};
use crate::validation::{PASSWORD, USERNAME};

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let t = use_translate();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(LoginState::default());

    let flow = services.with_value(|s| s.login_flow());
    flow.on_change(move |snapshot| state.set(snapshot.clone()));
    let flow = StoredValue::new_local(flow);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        let flow = flow.get_value();
        let api = services.with_value(|s| s.api.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if flow.submit(credentials, |c| api.login(c)).await == LoginOutcome::Success {
                navigate(PROTECTED_ROUTE, NavigateOptions::default());
            }
        });
    };

    let field_error = move |field: &'static str| state.with(|s| s.field_errors.get(field).map(t));
    let submitting = Signal::derive(move || state.with(LoginState::is_submitting));

    view! {
        <div class="login-page">
            <h1>{move || t("login")}</h1>
            <form class="login-form" novalidate=true on:submit=on_submit>
                <div class="form-field">
                    <label for=USERNAME>{move || t("username")}</label>
                    <Input
                        id=USERNAME
                        value=username
                        disabled=submitting
                        invalid=Signal::derive(move || field_error(USERNAME).is_some())
                    />
                    <p class="field-error">{move || field_error(USERNAME)}</p>
                </div>
                <div class="form-field">
                    <label for=PASSWORD>{move || t("password")}</label>
                    <Input
                        id=PASSWORD
                        kind=InputKind::Password
                        value=password
                        disabled=submitting
                        invalid=Signal::derive(move || field_error(PASSWORD).is_some())
                    />
                    <p class="field-error">{move || field_error(PASSWORD)}</p>
                </div>
                <Button button_type=ButtonType::Submit full_width=true disabled=submitting loading=submitting>
                    {move || t("login")}
                </Button>
                <Show when=move || state.with(|s| s.request_error.is_some())>
                    <p class="login-message" role="alert">
                        {move || t("login_failed")}
                        ": "
                        {move || state.with(|s| s.request_error.as_ref().map(ToString::to_string))}
                    </p>
                </Show>
            </form>
        </div>
    }
}
