//! Dark theme marker on the root document element.
//!
//! Adds or removes the `dark` class on `<html>`; stylesheets key their dark
//! palette off that class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `csr` build the document target is a no-op so native tests
//! stay deterministic. Tests that need to observe the marker use
//! [`MemoryDocument`].

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

pub const DARK_CLASS: &str = "dark";

/// A document whose root element can carry the dark marker class.
pub trait ThemeTarget {
    fn set_dark(&self, enabled: bool);
    fn is_dark(&self) -> bool;
}

/// The `<html>` element of the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn set_dark(&self, enabled: bool) {
        apply(enabled);
    }

    fn is_dark(&self) -> bool {
        has_marker()
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
#[cfg(feature = "csr")]
pub fn apply(enabled: bool) {
    let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
        return;
    };
    let class_list = el.class_list();
    let result = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
    if result.is_err() {
        log::warn!("could not update `{DARK_CLASS}` class on <html>");
    }
}

#[cfg(not(feature = "csr"))]
pub fn apply(_enabled: bool) {}

/// True if the `<html>` element currently carries the `dark` class.
#[cfg(feature = "csr")]
pub fn has_marker() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .is_some_and(|el| el.class_list().contains(DARK_CLASS))
}

#[cfg(not(feature = "csr"))]
pub fn has_marker() -> bool {
    false
}

/// Root element stand-in holding a class set. Clones share the set.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryDocument {
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ThemeTarget for MemoryDocument {
    fn set_dark(&self, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(DARK_CLASS.to_owned());
        } else {
            classes.remove(DARK_CLASS);
        }
    }

    fn is_dark(&self) -> bool {
        self.classes.borrow().contains(DARK_CLASS)
    }
}
