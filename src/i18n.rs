//! Translation tables and locale resolution.
//!
//! Every `locales/<code>/translation.json` file is embedded at compile time
//! and parsed into a flat key → string table. Lookups fall back from the
//! active locale to the default locale and finally to the key itself, so a
//! missing entry renders as its key instead of failing.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::{BTreeMap, HashMap};

use crate::config::DEFAULT_LOCALE;
use crate::error::LocaleError;

const EMBEDDED: &[(&str, &str)] = &[
    ("ar", include_str!("../locales/ar/translation.json")),
    ("en", include_str!("../locales/en/translation.json")),
    ("id", include_str!("../locales/id/translation.json")),
];

type Table = HashMap<String, String>;

/// All registered translation tables.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tables: BTreeMap<String, Table>,
    default_locale: String,
}

impl Catalog {
    /// Parse `(code, json)` sources into a catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError`] naming the first table that is not a flat
    /// JSON object of strings.
    pub fn from_sources(sources: &[(&str, &str)], default_locale: &str) -> Result<Self, LocaleError> {
        let mut tables = BTreeMap::new();
        for (code, raw) in sources {
            let table: Table = serde_json::from_str(raw)
                .map_err(|e| LocaleError { locale: (*code).to_owned(), message: e.to_string() })?;
            tables.insert((*code).to_owned(), table);
        }
        Ok(Self { tables, default_locale: default_locale.to_owned() })
    }

    /// Catalog of the tables shipped with the app. A broken table is logged
    /// and replaced by an empty catalog so lookups degrade to raw keys.
    pub fn embedded() -> Self {
        match Self::from_sources(EMBEDDED, DEFAULT_LOCALE) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("{e}");
                Self { tables: BTreeMap::new(), default_locale: DEFAULT_LOCALE.to_owned() }
            }
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn has(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    /// Registered locale for `code`: exact match, then the primary subtag
    /// (`id-ID` → `id`), then the default locale.
    pub fn resolve(&self, code: &str) -> String {
        let code = code.trim();
        if self.has(code) {
            return code.to_owned();
        }
        let primary = code.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        if self.has(&primary) {
            return primary;
        }
        self.default_locale.clone()
    }

    /// Look up `key` in `locale`, falling back to the default locale and
    /// then to the key itself.
    pub fn translate(&self, locale: &str, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(&self.default_locale, key))
            .unwrap_or(key)
            .to_owned()
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.tables.get(locale).and_then(|t| t.get(key)).map(String::as_str)
    }
}

/// Initial locale from the browser language, resolved against `catalog`.
#[cfg(feature = "csr")]
pub fn detect_locale(catalog: &Catalog) -> String {
    match web_sys::window().and_then(|w| w.navigator().language()) {
        Some(lang) => catalog.resolve(&lang),
        None => catalog.default_locale().to_owned(),
    }
}

#[cfg(not(feature = "csr"))]
pub fn detect_locale(catalog: &Catalog) -> String {
    catalog.default_locale().to_owned()
}
