//! Theme and locale preferences.
//!
//! DESIGN
//! ======
//! The theme is persisted and mirrored onto the document as the `dark`
//! class; the locale lives in memory only and selects the translation table
//! used by [`PreferenceStore::t`]. Neither is touched by the login flow or
//! the auth gate.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::config::THEME_STORAGE_KEY;
use crate::i18n::{self, Catalog};
use crate::util::dark_mode::{DocumentRoot, ThemeTarget};
use crate::util::storage::FallbackStorage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the current preferences, suitable for a reactive signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preference {
    pub theme: Theme,
    pub locale: String,
}

struct Inner {
    storage: FallbackStorage,
    document: Box<dyn ThemeTarget>,
    catalog: Catalog,
    theme: Cell<Theme>,
    locale: RefCell<String>,
}

/// Process-wide preference store. Clones share state.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Rc<Inner>,
}

impl PreferenceStore {
    /// Read the persisted theme, apply its marker to `document`, and start
    /// in `locale` (resolved against `catalog`).
    pub fn load(storage: FallbackStorage, document: impl ThemeTarget + 'static, catalog: Catalog, locale: &str) -> Self {
        let theme = match storage.read(THEME_STORAGE_KEY) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("ignoring unknown stored theme `{raw}`");
                Theme::default()
            }),
            None => Theme::default(),
        };
        document.set_dark(theme == Theme::Dark);
        let locale = catalog.resolve(locale);

        Self {
            inner: Rc::new(Inner {
                storage,
                document: Box::new(document),
                catalog,
                theme: Cell::new(theme),
                locale: RefCell::new(locale),
            }),
        }
    }

    /// Preferences backed by `localStorage`, the live `<html>` element, the
    /// embedded translations and the browser language.
    pub fn browser() -> Self {
        let catalog = Catalog::embedded();
        let locale = i18n::detect_locale(&catalog);
        Self::load(FallbackStorage::browser(), DocumentRoot, catalog, &locale)
    }

    pub fn theme(&self) -> Theme {
        self.inner.theme.get()
    }

    /// Flip between light and dark, update the document marker and persist.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.inner.theme.set(next);
        self.inner.document.set_dark(next == Theme::Dark);
        self.inner.storage.write(THEME_STORAGE_KEY, next.as_str());
        next
    }

    pub fn locale(&self) -> String {
        self.inner.locale.borrow().clone()
    }

    /// Switch the active translation table. Codes without a table fall back
    /// to the default locale. Returns the locale now in effect.
    pub fn set_locale(&self, code: &str) -> String {
        let resolved = self.inner.catalog.resolve(code);
        if resolved != code {
            log::info!("locale `{code}` resolved to `{resolved}`");
        }
        self.inner.locale.replace(resolved.clone());
        resolved
    }

    /// Translate `key` in the active locale.
    pub fn t(&self, key: &str) -> String {
        self.inner.catalog.translate(&self.inner.locale.borrow(), key)
    }

    pub fn snapshot(&self) -> Preference {
        Preference { theme: self.theme(), locale: self.locale() }
    }
}
