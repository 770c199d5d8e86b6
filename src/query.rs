//! Keyed async-state cache shared by list queries and the login mutation.
//!
//! DESIGN
//! ======
//! Each key maps to one entry: an in-flight `Shared` future or a settled
//! [`AsyncResource`]. Callers arriving while a key is in flight await the
//! same shared future, so the producer runs once per flight and every caller
//! observes the same settle. Values are type-erased behind `Rc<dyn Any>` so
//! unrelated views share one cache instance.
//!
//! The cache lives on the UI thread (`Rc` + `RefCell`); no borrow is held
//! across an await point.
//!
//! ERROR HANDLING
//! ==============
//! A failed producer settles its key into [`Status::Error`] and is not
//! retried. The next `fetch` of an errored key starts a new flight.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::{FetchError, RequestError};

/// Cache key, e.g. `"pokemons"` or `"auth/login"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QueryKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for QueryKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Pending,
    Success,
    Error,
}

/// Tri-state wrapper around the result of an async operation.
#[derive(Clone, Debug, PartialEq)]
pub struct AsyncResource<T> {
    pub status: Status,
    pub data: Option<T>,
    pub error: Option<FetchError>,
}

impl<T> AsyncResource<T> {
    pub fn pending() -> Self {
        Self { status: Status::Pending, data: None, error: None }
    }

    pub fn success(data: T) -> Self {
        Self { status: Status::Success, data: Some(data), error: None }
    }

    pub fn failure(error: FetchError) -> Self {
        Self { status: Status::Error, data: None, error: Some(error) }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }
}

type Erased = Rc<dyn Any>;
type Outcome = Result<Erased, FetchError>;
type Flight = Shared<LocalBoxFuture<'static, Outcome>>;

enum Entry {
    InFlight(Flight),
    Settled(Outcome),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Serve a previous success from cache.
    Query,
    /// Always run unless a flight is already pending.
    Mutation,
}

enum Start {
    Cached(Erased),
    Join(Flight),
    Fresh,
}

/// Shared handle to the keyed cache. Clones see the same entries.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Rc<RefCell<HashMap<QueryKey, Entry>>>,
    sequence: Rc<Cell<u64>>,
}

impl QueryCache {
    /// A key under `prefix` that no other caller of this cache (or its
    /// clones) has been handed, e.g. `auth/login#3`.
    pub fn unique_key(&self, prefix: &str) -> QueryKey {
        let n = self.sequence.get() + 1;
        self.sequence.set(n);
        QueryKey::from(format!("{prefix}#{n}"))
    }

    /// Resolve `key`, running `producer` only if nothing is cached or in
    /// flight for it.
    pub async fn fetch<T, F, Fut>(&self, key: impl Into<QueryKey>, producer: F) -> AsyncResource<Rc<T>>
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, RequestError>> + 'static,
    {
        self.run(key.into(), Mode::Query, producer).await
    }

    /// Run a mutation under `key`. Concurrent calls join the pending flight;
    /// a previous success is never replayed.
    pub async fn mutate<T, F, Fut>(&self, key: impl Into<QueryKey>, producer: F) -> AsyncResource<Rc<T>>
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, RequestError>> + 'static,
    {
        self.run(key.into(), Mode::Mutation, producer).await
    }

    /// Current state of `key`, or `None` if it has never been requested.
    pub fn resource<T: 'static>(&self, key: impl Into<QueryKey>) -> Option<AsyncResource<Rc<T>>> {
        let key = key.into();
        let entries = self.entries.borrow();
        match entries.get(&key)? {
            Entry::InFlight(_) => Some(AsyncResource::pending()),
            Entry::Settled(outcome) => Some(typed(&key, outcome.clone())),
        }
    }

    /// Forget `key`. A flight already running still resolves for its
    /// callers but its result is not recorded.
    pub fn invalidate(&self, key: impl Into<QueryKey>) -> bool {
        self.entries.borrow_mut().remove(&key.into()).is_some()
    }

    async fn run<T, F, Fut>(&self, key: QueryKey, mode: Mode, producer: F) -> AsyncResource<Rc<T>>
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, RequestError>> + 'static,
    {
        let flight = match self.start(&key, mode) {
            Start::Cached(data) => return typed(&key, Ok(data)),
            Start::Join(flight) => flight,
            Start::Fresh => {
                let pending = producer();
                let flight = async move { pending.await.map(|v| Rc::new(v) as Erased).map_err(FetchError::from) }
                    .boxed_local()
                    .shared();
                self.entries.borrow_mut().insert(key.clone(), Entry::InFlight(flight.clone()));
                log::debug!("query `{key}` started");
                flight
            }
        };

        let outcome = flight.clone().await;
        self.settle(&key, &flight, &outcome);
        typed(&key, outcome)
    }

    fn start(&self, key: &QueryKey, mode: Mode) -> Start {
        match self.entries.borrow().get(key) {
            Some(Entry::InFlight(flight)) => Start::Join(flight.clone()),
            Some(Entry::Settled(Ok(data))) if mode == Mode::Query => Start::Cached(Rc::clone(data)),
            _ => Start::Fresh,
        }
    }

    fn settle(&self, key: &QueryKey, flight: &Flight, outcome: &Outcome) {
        let mut entries = self.entries.borrow_mut();
        let current = matches!(entries.get(key), Some(Entry::InFlight(f)) if f.ptr_eq(flight));
        if !current {
            return;
        }
        if let Err(e) = outcome {
            log::warn!("query `{key}` failed: {e}");
        }
        entries.insert(key.clone(), Entry::Settled(outcome.clone()));
    }
}

fn typed<T: 'static>(key: &QueryKey, outcome: Outcome) -> AsyncResource<Rc<T>> {
    match outcome {
        Ok(data) => match data.downcast::<T>() {
            Ok(data) => AsyncResource::success(data),
            Err(_) => AsyncResource::failure(FetchError::TypeMismatch { key: key.to_string() }),
        },
        Err(e) => AsyncResource::failure(e),
    }
}
