//! REST API helpers for communicating with the backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to [`RequestError::Unavailable`] since
//! these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so login and list failures
//! settle into an error state the UI can render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Credentials, LoginResponse, Pokemon, PokemonPage, User, UserList};
use crate::config::AppConfig;
use crate::error::RequestError;

pub const LOGIN_PATH: &str = "/auth/login";
pub const POKEMON_PATH: &str = "/pokemon";
pub const USERS_PATH: &str = "/user";

/// Handle to the configured API. Every call returns a `'static` future so
/// it can be handed to the query cache as a producer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// `POST /auth/login` with the credentials as a JSON body.
    pub fn login(&self, credentials: Credentials) -> impl Future<Output = Result<LoginResponse, RequestError>> + 'static {
        let url = self.config.endpoint(LOGIN_PATH);
        async move { post_json(&url, &credentials).await }
    }

    /// `GET /pokemon`, unwrapped to its `results`.
    pub fn pokemons(&self) -> impl Future<Output = Result<Vec<Pokemon>, RequestError>> + 'static {
        let url = self.config.endpoint(POKEMON_PATH);
        async move { get_json::<PokemonPage>(&url, None).await.map(|page| page.results) }
    }

    /// `GET /user` authorized with the session token.
    pub fn users(&self, token: String) -> impl Future<Output = Result<Vec<User>, RequestError>> + 'static {
        let url = self.config.endpoint(USERS_PATH);
        async move { get_json::<UserList>(&url, Some(&token)).await.map(UserList::into_users) }
    }
}

/// `Authorization` header value for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T, RequestError> {
    let mut request = gloo_net::http::Request::get(url).header("Content-Type", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &bearer_header(token));
    }
    let resp = request.send().await.map_err(|e| RequestError::Network(e.to_string()))?;
    if !is_success(resp.status()) {
        return Err(RequestError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, RequestError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| RequestError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    if !is_success(resp.status()) {
        return Err(RequestError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn get_json<T: DeserializeOwned>(_url: &str, _token: Option<&str>) -> Result<T, RequestError> {
    Err(RequestError::Unavailable)
}

#[cfg(not(feature = "csr"))]
async fn post_json<B: Serialize, T: DeserializeOwned>(_url: &str, _body: &B) -> Result<T, RequestError> {
    Err(RequestError::Unavailable)
}
