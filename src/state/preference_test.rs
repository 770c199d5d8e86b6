use super::*;
use crate::util::dark_mode::MemoryDocument;
use crate::util::storage::MemoryStorage;

fn catalog() -> Catalog {
    Catalog::from_sources(
        &[
            ("en", r#"{"welcome": "Welcome", "language": "Language"}"#),
            ("id", r#"{"welcome": "Selamat datang"}"#),
            ("ar", r#"{"welcome": "مرحبا"}"#),
        ],
        "en",
    )
    .unwrap()
}

fn load(primary: &MemoryStorage, doc: &MemoryDocument) -> PreferenceStore {
    PreferenceStore::load(FallbackStorage::new(primary.clone()), doc.clone(), catalog(), "en")
}

// =============================================================
// Theme
// =============================================================

#[test]
fn first_load_defaults_to_light_without_marker() {
    let doc = MemoryDocument::default();
    let prefs = load(&MemoryStorage::default(), &doc);
    assert_eq!(prefs.theme(), Theme::Light);
    assert!(!doc.is_dark());
}

#[test]
fn persisted_dark_theme_is_applied_on_load() {
    let primary = MemoryStorage::default();
    primary.insert("theme", "dark");
    let doc = MemoryDocument::default();
    let prefs = load(&primary, &doc);
    assert_eq!(prefs.theme(), Theme::Dark);
    assert!(doc.is_dark());
}

#[test]
fn unknown_persisted_theme_falls_back_to_light() {
    let primary = MemoryStorage::default();
    primary.insert("theme", "sepia");
    assert_eq!(load(&primary, &MemoryDocument::default()).theme(), Theme::Light);
}

#[test]
fn toggle_flips_theme_marker_and_storage() {
    let primary = MemoryStorage::default();
    let doc = MemoryDocument::default();
    let prefs = load(&primary, &doc);

    assert_eq!(prefs.toggle_theme(), Theme::Dark);
    assert!(doc.is_dark());
    assert_eq!(primary.value("theme").as_deref(), Some("dark"));

    assert_eq!(prefs.toggle_theme(), Theme::Light);
    assert!(!doc.is_dark());
    assert_eq!(primary.value("theme").as_deref(), Some("light"));
}

#[test]
fn theme_after_n_toggles_follows_parity() {
    for n in 0..9 {
        let doc = MemoryDocument::default();
        let prefs = load(&MemoryStorage::default(), &doc);
        for _ in 0..n {
            prefs.toggle_theme();
        }
        let expected = if n % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(prefs.theme(), expected, "after {n} toggles");
        assert_eq!(doc.is_dark(), expected == Theme::Dark);
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn toggle_survives_unavailable_storage() {
    let prefs = PreferenceStore::browser();
    assert_eq!(prefs.theme(), Theme::Light);
    assert_eq!(prefs.toggle_theme(), Theme::Dark);
    assert_eq!(prefs.theme(), Theme::Dark);
}

#[test]
fn theme_strings_roundtrip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
    assert_eq!(Theme::parse("Dark"), None);
}

// =============================================================
// Locale
// =============================================================

#[test]
fn set_locale_switches_translations() {
    let prefs = load(&MemoryStorage::default(), &MemoryDocument::default());
    assert_eq!(prefs.t("welcome"), "Welcome");
    assert_eq!(prefs.set_locale("id"), "id");
    assert_eq!(prefs.locale(), "id");
    assert_eq!(prefs.t("welcome"), "Selamat datang");
}

#[test]
fn set_locale_unknown_code_falls_back_to_default() {
    let prefs = load(&MemoryStorage::default(), &MemoryDocument::default());
    prefs.set_locale("ar");
    assert_eq!(prefs.set_locale("fr"), "en");
    assert_eq!(prefs.t("welcome"), "Welcome");
}

#[test]
fn missing_key_in_active_locale_uses_default_table() {
    let prefs = load(&MemoryStorage::default(), &MemoryDocument::default());
    prefs.set_locale("ar");
    assert_eq!(prefs.t("language"), "Language");
}

#[test]
fn locale_is_not_persisted() {
    let primary = MemoryStorage::default();
    let prefs = load(&primary, &MemoryDocument::default());
    prefs.set_locale("id");
    assert_eq!(primary.value("locale"), None);
    assert_eq!(primary.value("theme"), None);
}

#[test]
fn initial_locale_is_resolved() {
    let prefs = PreferenceStore::load(
        FallbackStorage::new(MemoryStorage::default()),
        MemoryDocument::default(),
        catalog(),
        "id-ID",
    );
    assert_eq!(prefs.snapshot(), Preference { theme: Theme::Light, locale: "id".to_owned() });
}
