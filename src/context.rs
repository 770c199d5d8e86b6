//! Context plumbing between the root component and the pages.
//!
//! The stores hold `Rc` state, so they travel through context inside a
//! local-arena `StoredValue`. Preference changes are mirrored into an
//! `RwSignal<Preference>` so translated text re-renders on a locale switch.

use leptos::prelude::*;

use crate::state::AppServices;
use crate::state::preference::Preference;

/// Handle to the application services provided by `App`.
pub type ServicesHandle = StoredValue<AppServices, LocalStorage>;

/// Provide `services` and a preference signal to every descendant.
pub fn provide_services(services: AppServices) {
    let preference = RwSignal::new(services.preferences.snapshot());
    provide_context::<ServicesHandle>(StoredValue::new_local(services));
    provide_context(preference);
}

pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}

pub fn use_preference() -> RwSignal<Preference> {
    expect_context::<RwSignal<Preference>>()
}

/// Reactive translation lookup in the active locale.
pub fn use_translate() -> impl Fn(&str) -> String + Copy + Send + Sync + 'static {
    let services = use_services();
    let preference = use_preference();
    move |key| {
        preference.track();
        services.with_value(|s| s.preferences.t(key))
    }
}

/// Switch locale and publish the change.
pub fn switch_locale(services: ServicesHandle, preference: RwSignal<Preference>, code: &str) {
    let locale = services.with_value(|s| s.preferences.set_locale(code));
    preference.update(|p| p.locale = locale);
}

/// Toggle the theme and publish the change.
pub fn toggle_theme(services: ServicesHandle, preference: RwSignal<Preference>) {
    let theme = services.with_value(|s| s.preferences.toggle_theme());
    preference.update(|p| p.theme = theme);
}
