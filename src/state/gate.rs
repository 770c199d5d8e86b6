//! One-shot route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedLayout` activates a gate once when it mounts. The decision is
//! local and synchronous: a stored token means the protected subtree renders,
//! no token means a full redirect to the public login route. A token cleared
//! after activation does not re-trigger the gate.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::cell::Cell;

use crate::config::AUTH_ROUTE;
use crate::state::session::SessionStore;
use crate::util::navigation::Redirect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Allowed,
    Denied,
}

#[derive(Debug)]
pub struct AuthGate {
    state: Cell<GateState>,
    redirect_to: &'static str,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(AUTH_ROUTE)
    }
}

impl AuthGate {
    /// Gate that sends unauthenticated visitors to `redirect_to`.
    pub fn new(redirect_to: &'static str) -> Self {
        Self { state: Cell::new(GateState::Checking), redirect_to }
    }

    pub fn state(&self) -> GateState {
        self.state.get()
    }

    /// Decide once. Later calls return the settled state without consulting
    /// the session or redirecting again.
    pub fn activate(&self, session: &SessionStore, location: &impl Redirect) -> GateState {
        if self.state.get() != GateState::Checking {
            return self.state.get();
        }
        let next = if session.is_authenticated() {
            GateState::Allowed
        } else {
            log::info!("no session token; redirecting to {}", self.redirect_to);
            location.redirect(self.redirect_to);
            GateState::Denied
        };
        self.state.set(next);
        next
    }
}
