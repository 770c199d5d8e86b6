use std::cell::RefCell;

use super::*;
use crate::util::storage::{FallbackStorage, MemoryStorage};

#[derive(Default)]
struct RecordedRedirects(RefCell<Vec<String>>);

impl Redirect for RecordedRedirects {
    fn redirect(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }
}

fn session() -> SessionStore {
    SessionStore::new(FallbackStorage::new(MemoryStorage::default()))
}

#[test]
fn new_gate_is_checking() {
    assert_eq!(AuthGate::default().state(), GateState::Checking);
}

#[test]
fn empty_session_redirects_to_auth_route() {
    let redirects = RecordedRedirects::default();
    let gate = AuthGate::default();
    assert_eq!(gate.activate(&session(), &redirects), GateState::Denied);
    assert_eq!(*redirects.0.borrow(), vec!["/auth".to_owned()]);
}

#[test]
fn stored_token_allows_without_redirect() {
    let redirects = RecordedRedirects::default();
    let session = session();
    session.set_token("xyz");
    let gate = AuthGate::default();
    assert_eq!(gate.activate(&session, &redirects), GateState::Allowed);
    assert!(redirects.0.borrow().is_empty());
}

#[test]
fn activation_decides_only_once() {
    let redirects = RecordedRedirects::default();
    let session = session();
    let gate = AuthGate::default();
    assert_eq!(gate.activate(&session, &redirects), GateState::Denied);

    session.set_token("late");
    assert_eq!(gate.activate(&session, &redirects), GateState::Denied);
    assert_eq!(redirects.0.borrow().len(), 1);
}

#[test]
fn token_cleared_after_allow_does_not_redirect() {
    let redirects = RecordedRedirects::default();
    let session = session();
    session.set_token("xyz");
    let gate = AuthGate::default();
    gate.activate(&session, &redirects);

    session.clear_token();
    assert_eq!(gate.activate(&session, &redirects), GateState::Allowed);
    assert!(redirects.0.borrow().is_empty());
}

#[test]
fn custom_redirect_target_is_used() {
    let redirects = RecordedRedirects::default();
    AuthGate::new("/login").activate(&session(), &redirects);
    assert_eq!(*redirects.0.borrow(), vec!["/login".to_owned()]);
}
