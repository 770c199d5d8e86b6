//! Field schemas checked before a form is submitted.
//!
//! A [`Schema`] is an ordered list of rules per field. Values are trimmed
//! before checking, and only the first failing rule of each field is
//! reported. Messages are translation keys; the view resolves them through
//! the active locale.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::error::{FieldErrors, ValidationError};
use crate::net::types::Credentials;

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

impl Rule {
    fn accepts(self, value: &str) -> bool {
        let len = value.chars().count();
        match self {
            Self::Required => len > 0,
            Self::MinLength(min) => len >= min,
            Self::MaxLength(max) => len <= max,
        }
    }
}

/// Named form values a schema can inspect.
pub trait FormValues {
    fn value(&self, field: &str) -> Option<&str>;
}

impl FormValues for Credentials {
    fn value(&self, field: &str) -> Option<&str> {
        match field {
            USERNAME => Some(&self.username),
            PASSWORD => Some(&self.password),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Schema {
    checks: Vec<(&'static str, Rule, &'static str)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rule` for `field`, reporting `message` when it fails.
    #[must_use]
    pub fn rule(mut self, field: &'static str, rule: Rule, message: &'static str) -> Self {
        self.checks.push((field, rule, message));
        self
    }

    /// Check every rule against `values`.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages of every field with a failing rule.
    /// A field missing from `values` fails all of its rules.
    pub fn validate(&self, values: &impl FormValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for &(field, rule, message) in &self.checks {
            if errors.get(field).is_some() {
                continue;
            }
            let passes = values.value(field).map(str::trim).is_some_and(|v| rule.accepts(v));
            if !passes {
                errors.push(ValidationError { field, message: message.to_owned() });
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Schema for the login form: both fields required.
pub fn login_schema() -> Schema {
    Schema::new()
        .rule(USERNAME, Rule::Required, "username_required")
        .rule(PASSWORD, Rule::Required, "password_required")
}
