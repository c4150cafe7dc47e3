use popup_theme::{
    reset_system_detector, set_system_detector, Appearance, FileStore, FixedSignal, PreferenceStore,
    StorageError, SystemSignal, ThemeError, ThemePreference, ThemeProvider,
};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_preference_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let theme = ThemeProvider::new(FileStore::new(&path))
        .with_signal(FixedSignal(false))
        .activate()
        .unwrap();
    theme.set_theme(ThemePreference::Dark).unwrap();

    let reopened = ThemeProvider::new(FileStore::new(&path))
        .with_signal(FixedSignal(false))
        .activate()
        .unwrap();
    assert_eq!(reopened.theme(), ThemePreference::Dark);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"popup-theme-value\""));
    assert!(raw.contains("\"dark\""));
}

#[test]
fn test_unreadable_storage_fails_activation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "not json").unwrap();

    let err = ThemeProvider::new(FileStore::new(&path))
        .with_signal(FixedSignal(false))
        .activate()
        .unwrap_err();
    assert!(matches!(err, ThemeError::Storage(StorageError::Format { .. })));
}

#[test]
fn test_other_settings_in_same_area_are_kept() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("storage.json"));
    store.set("scramble-enabled", "true").unwrap();

    let theme = ThemeProvider::new(store.clone())
        .with_signal(FixedSignal(false))
        .activate()
        .unwrap();
    theme.set_theme(ThemePreference::Light).unwrap();

    assert_eq!(store.get("scramble-enabled").unwrap().as_deref(), Some("true"));
}

#[test]
#[serial]
fn test_system_preference_follows_os_detector() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    set_system_detector(|| true);
    let theme = ThemeProvider::new(FileStore::new(&path))
        .with_signal(SystemSignal)
        .activate()
        .unwrap();
    assert_eq!(theme.effective_appearance(), Appearance::Dark);

    set_system_detector(|| false);
    assert_eq!(theme.effective_appearance(), Appearance::Dark);
    assert_eq!(theme.refresh_appearance(), Appearance::Light);
    assert_eq!(theme.classes(), vec!["light"]);

    reset_system_detector();
}
