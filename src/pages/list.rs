//! Settled-resource renderers shared by the list pages.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::error::FetchError;
use crate::net::types::{Pokemon, User};
use crate::query::AsyncResource;

/// Translated load-failure line, followed by the error when there is one.
pub fn failure_text(t: impl Fn(&str) -> String, error: Option<&FetchError>) -> String {
    match error {
        Some(e) => format!("{} {e}", t("load_failed")),
        None => t("load_failed"),
    }
}

fn failure_view(error: Option<FetchError>, t: impl Fn(&str) -> String + Copy + Send + Sync + 'static) -> AnyView {
    view! { <p class="error-message" role="alert">{move || failure_text(t, error.as_ref())}</p> }.into_any()
}

pub fn pokemon_list(res: AsyncResource<Rc<Vec<Pokemon>>>, t: impl Fn(&str) -> String + Copy + Send + Sync + 'static) -> AnyView {
    match res.data {
        Some(list) => view! {
            <ul class="pokemon-list">
                {list.iter().map(|p| view! { <li class="pokemon-list__item">{p.name.clone()}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        None => failure_view(res.error, t),
    }
}

pub fn user_list(res: AsyncResource<Rc<Vec<User>>>, t: impl Fn(&str) -> String + Copy + Send + Sync + 'static) -> AnyView {
    match res.data {
        Some(list) => view! {
            <ul class="user-list">
                {list
                    .iter()
                    .map(|u| {
                        let email = u.email.clone().unwrap_or_default();
                        view! {
                            <li class="user-list__item">
                                <span class="user-list__name">{u.username.clone()}</span>
                                <span class="user-list__email">{email}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        None => failure_view(res.error, t),
    }
}
