//! Wire types for the REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login form values. Built per submission and never persisted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful `POST /auth/login`. Fields other than `token` are
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Body of `GET /pokemon`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PokemonPage {
    #[serde(default)]
    pub results: Vec<Pokemon>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, alias = "name")]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `GET /user`: either a bare array or `{ "users": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UserList {
    Bare(Vec<User>),
    Wrapped { users: Vec<User> },
}

impl UserList {
    pub fn into_users(self) -> Vec<User> {
        match self {
            Self::Bare(users) | Self::Wrapped { users } => users,
        }
    }
}
