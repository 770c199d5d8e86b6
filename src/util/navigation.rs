//! Full-page navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth gate and logout leave the single-page app with a hard redirect,
//! so the next page load starts from a clean state. In-app transitions go
//! through `leptos_router` instead.

/// Performs a full navigation to `path`.
pub trait Redirect {
    fn redirect(&self, path: &str);
}

/// `window.location` of the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

#[cfg(feature = "csr")]
impl Redirect for BrowserLocation {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("no window available to redirect to {path}");
            return;
        };
        if window.location().set_href(path).is_err() {
            log::error!("redirect to {path} was rejected");
        }
    }
}

#[cfg(not(feature = "csr"))]
impl Redirect for BrowserLocation {
    fn redirect(&self, path: &str) {
        log::info!("redirect to {path} skipped outside the browser");
    }
}
