//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so the tunables are read with
//! `option_env!` when the crate is compiled:
//!
//! - `PUBLIC_API_URL`: HTTP API base URL (default [`DEFAULT_API_BASE_URL`])
//! - `PUBLIC_LOG_LEVEL`: console log level (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Public login entry point; the gate redirects here.
pub const AUTH_ROUTE: &str = "/auth";
/// Protected entry point reached after a successful login.
pub const PROTECTED_ROUTE: &str = "/admin";
pub const PUBLIC_ROUTE: &str = "/public";

pub const TOKEN_STORAGE_KEY: &str = "token";
pub const THEME_STORAGE_KEY: &str = "theme";

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PUBLIC_API_URL"), option_env!("PUBLIC_LOG_LEVEL"))
    }

    /// Build config from raw optional values, applying defaults.
    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self { api_base_url: parse_base_url(api_base_url), log_level: parse_log_level(log_level) }
    }

    /// Absolute URL for an API `path` such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim).map(|v| v.trim_end_matches('/')) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    match raw.map(str::trim).map(str::parse::<log::Level>) {
        Some(Ok(level)) => level,
        _ => DEFAULT_LOG_LEVEL,
    }
}
