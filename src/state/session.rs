//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the auth gate and the admin view, written by the login flow. The
//! token is opaque: its presence alone means "signed in", and nothing here
//! checks its shape or expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::rc::Rc;

use crate::config::TOKEN_STORAGE_KEY;
use crate::util::storage::FallbackStorage;

/// Persisted session token. Clones share the same storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<FallbackStorage>,
}

impl SessionStore {
    pub fn new(storage: FallbackStorage) -> Self {
        Self { storage: Rc::new(storage) }
    }

    /// Session backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(FallbackStorage::browser())
    }

    /// The stored token. An empty stored value counts as absent.
    pub fn token(&self) -> Option<String> {
        self.storage.read(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        self.storage.write(TOKEN_STORAGE_KEY, token);
    }

    pub fn clear_token(&self) {
        self.storage.delete(TOKEN_STORAGE_KEY);
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("authenticated", &self.is_authenticated()).finish()
    }
}
