use folio_core::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme, ThemeController,
    ThemeOrigin,
};

#[test]
fn stored_preference_wins_over_ambient() {
    let controller =
        ThemeController::initialize(MemoryPreferenceStore::with_theme(Theme::Dark), Theme::Light);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.origin(), ThemeOrigin::Stored);
}

#[test]
fn missing_preference_uses_ambient() {
    let controller =
        ThemeController::initialize(MemoryPreferenceStore::new(), Theme::from_prefers_dark(true));
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.origin(), ThemeOrigin::Ambient);
}

#[test]
fn toggle_flips_and_persists() {
    let mut controller = ThemeController::initialize(MemoryPreferenceStore::new(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.store().stored(), Some(Theme::Dark));
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.store().stored(), Some(Theme::Light));
}

#[test]
fn unavailable_store_still_toggles_in_session() {
    let mut controller =
        ThemeController::initialize(MemoryPreferenceStore::unavailable(), Theme::Light);
    assert_eq!(controller.origin(), ThemeOrigin::Ambient);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.store().stored(), None);
}

#[test]
fn toggle_and_apply_pushes_theme_to_sink() {
    let mut applied = Vec::new();
    let mut controller = ThemeController::initialize(MemoryPreferenceStore::new(), Theme::Light);

    controller.apply(&mut |theme| applied.push(theme));
    controller.toggle_and_apply(&mut |theme| applied.push(theme));
    assert_eq!(applied, vec![Theme::Light, Theme::Dark]);
}

#[test]
fn file_store_round_trips_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("theme.json");

    let mut first = ThemeController::initialize(FilePreferenceStore::new(&path), Theme::Light);
    assert_eq!(first.origin(), ThemeOrigin::Ambient);
    first.toggle();

    let stored = std::fs::read_to_string(&path).unwrap();
    assert_eq!(stored, r#"{"theme":"dark"}"#);

    let second = ThemeController::initialize(FilePreferenceStore::new(&path), Theme::Light);
    assert_eq!(second.current(), Theme::Dark);
    assert_eq!(second.origin(), ThemeOrigin::Stored);
}

#[test]
fn corrupt_file_falls_back_to_ambient() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    std::fs::write(&path, r#"{"theme":"sepia"}"#).unwrap();

    let store = FilePreferenceStore::new(&path);
    assert!(store.load().is_err());

    let controller = ThemeController::initialize(store, Theme::Dark);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.origin(), ThemeOrigin::Ambient);
}

#[test]
fn theme_parses_from_text() {
    assert_eq!(" Dark ".parse::<Theme>().unwrap(), Theme::Dark);
    assert!("sepia".parse::<Theme>().is_err());
    assert_eq!(Theme::Dark.to_string(), "dark");
}
