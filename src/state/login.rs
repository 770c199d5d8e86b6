//! Login submission state machine.
//!
//! ```text
//! Idle -> Validating -> Submitting -> { Success, Failed } -> (next submit)
//!             |
//!             +-> Idle (field errors, nothing sent)
//! ```
//!
//! Validation always runs before anything is sent, and a submit arriving
//! while a request is in flight is dropped. The request goes through the
//! query cache as a mutation under a key derived from [`LOGIN_MUTATION`] and
//! owned by this flow, so two forms never join each other's request. Only a
//! response carrying a non-empty token writes the session; every failure is
//! logged and kept on the state for the view to render.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::error::{FetchError, FieldErrors, RequestError};
use crate::net::types::{Credentials, LoginResponse};
use crate::query::{QueryCache, QueryKey};
use crate::state::session::SessionStore;
use crate::validation::Schema;

/// Prefix of every login mutation key.
pub const LOGIN_MUTATION: &str = "auth/login";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// Everything the login view renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub phase: LoginPhase,
    pub field_errors: FieldErrors,
    pub request_error: Option<FetchError>,
}

impl LoginState {
    /// True while the submit control must stay disabled.
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A request was already in flight; nothing happened.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The token was stored in the session.
    Success,
    Failed(FetchError),
}

type Listener = Box<dyn Fn(&LoginState)>;

struct Inner {
    key: QueryKey,
    schema: Schema,
    cache: QueryCache,
    session: SessionStore,
    state: RefCell<LoginState>,
    listener: RefCell<Option<Listener>>,
}

/// One login form's flow. Clones drive the same instance.
#[derive(Clone)]
pub struct LoginFlow {
    inner: Rc<Inner>,
}

impl LoginFlow {
    pub fn new(schema: Schema, cache: QueryCache, session: SessionStore) -> Self {
        Self {
            inner: Rc::new(Inner {
                key: cache.unique_key(LOGIN_MUTATION),
                schema,
                cache,
                session,
                state: RefCell::new(LoginState::default()),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Call `listener` with a snapshot after every transition.
    pub fn on_change(&self, listener: impl Fn(&LoginState) + 'static) {
        self.inner.listener.replace(Some(Box::new(listener)));
    }

    /// Mutation key of this flow's requests.
    pub fn key(&self) -> &QueryKey {
        &self.inner.key
    }

    pub fn state(&self) -> LoginState {
        self.inner.state.borrow().clone()
    }

    pub fn phase(&self) -> LoginPhase {
        self.inner.state.borrow().phase
    }

    /// Validate `credentials` and, if they pass, send them with `send`.
    pub async fn submit<F, Fut>(&self, credentials: Credentials, send: F) -> LoginOutcome
    where
        F: FnOnce(Credentials) -> Fut,
        Fut: Future<Output = Result<LoginResponse, RequestError>> + 'static,
    {
        if self.phase() == LoginPhase::Submitting {
            log::debug!("login submit ignored while a request is in flight");
            return LoginOutcome::Ignored;
        }

        self.transition(|s| {
            s.phase = LoginPhase::Validating;
            s.request_error = None;
        });
        if let Err(errors) = self.inner.schema.validate(&credentials) {
            self.transition(|s| {
                s.phase = LoginPhase::Idle;
                s.field_errors = errors.clone();
            });
            return LoginOutcome::Invalid(errors);
        }

        self.transition(|s| {
            s.phase = LoginPhase::Submitting;
            s.field_errors = FieldErrors::default();
        });
        let resource = self.inner.cache.mutate(self.inner.key.clone(), move || send(credentials)).await;

        match (resource.data, resource.error) {
            (Some(resp), _) if !resp.token.is_empty() => {
                self.inner.session.set_token(&resp.token);
                self.transition(|s| s.phase = LoginPhase::Success);
                log::info!("login succeeded");
                LoginOutcome::Success
            }
            (Some(_), _) => self.fail(RequestError::Decode("login response carried an empty token".to_owned()).into()),
            (None, Some(error)) => self.fail(error),
            (None, None) => self.fail(RequestError::Decode("login settled without a response".to_owned()).into()),
        }
    }

    fn fail(&self, error: FetchError) -> LoginOutcome {
        log::error!("login failed: {error}");
        self.transition(|s| {
            s.phase = LoginPhase::Failed;
            s.request_error = Some(error.clone());
        });
        LoginOutcome::Failed(error)
    }

    fn transition(&self, apply: impl FnOnce(&mut LoginState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        if let Some(listener) = self.inner.listener.borrow().as_ref() {
            listener(&snapshot);
        }
    }
}
