//! Error taxonomy for the client shell.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is allowed to reach the rendering layer as a panic. Storage
//! errors are absorbed by the in-memory fallback, request errors settle a
//! cache entry into its error state, and validation errors are rendered next
//! to the input they belong to.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use thiserror::Error;

/// Browser storage failures. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage {op} failed for key `{key}`")]
    Operation { op: &'static str, key: String },
}

/// Transport failures from the HTTP collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("http transport is not available outside the browser")]
    Unavailable,
}

/// Error stored on a settled cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("cache entry `{key}` holds a different data type")]
    TypeMismatch { key: String },
}

/// An embedded translation table that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid translation table for `{locale}`: {message}")]
pub struct LocaleError {
    pub locale: String,
    pub message: String,
}

/// A single schema violation for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Per-field validation messages, first violation wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Record `error` unless the field already carries a message.
    pub fn push(&mut self, error: ValidationError) {
        self.0.entry(error.field).or_insert(error.message);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
