//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `preference`, `gate`, `login`) so
//! components depend on small focused models. The long-lived stores are
//! bundled in [`AppServices`], built once by the root component and handed
//! down through context instead of living in module globals.

pub mod gate;
pub mod login;
pub mod preference;
pub mod session;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::query::QueryCache;
use crate::state::login::LoginFlow;
use crate::state::preference::PreferenceStore;
use crate::state::session::SessionStore;
use crate::validation::login_schema;

/// Application-wide stores and clients. Clones share the same state.
#[derive(Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub cache: QueryCache,
    pub session: SessionStore,
    pub preferences: PreferenceStore,
}

impl AppServices {
    pub fn new(config: AppConfig, session: SessionStore, preferences: PreferenceStore) -> Self {
        Self { api: ApiClient::new(config), cache: QueryCache::default(), session, preferences }
    }

    /// Services backed by the live browser environment.
    pub fn browser(config: AppConfig) -> Self {
        Self::new(config, SessionStore::browser(), PreferenceStore::browser())
    }

    /// A fresh login flow for one form instance.
    pub fn login_flow(&self) -> LoginFlow {
        LoginFlow::new(login_schema(), self.cache.clone(), self.session.clone())
    }
}
