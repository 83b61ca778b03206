//! Integration tests for the preference store and settings service

use std::fs;
use tempfile::TempDir;
use unimate::settings::{
    FileStore, Language, MemoryStore, PreferenceStore, Settings, SettingsService, StoreError,
    LANGUAGE_KEY, OFFLINE_MODE_KEY,
};

/// Backend that fails every call
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disk unplugged".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk unplugged".to_string()))
    }
}

#[test]
fn file_store_round_trips_between_services() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("preferences.json");

    let mut first = SettingsService::load_from(FileStore::new(&path));
    assert_eq!(first.settings(), Settings::default());
    first.set_language(Language::Sinhala);
    first.set_offline(true);

    let second = SettingsService::load_from(FileStore::new(&path));
    assert_eq!(second.language(), Language::Sinhala);
    assert!(second.is_offline());
}

#[test]
fn offline_flag_is_stored_as_json_boolean() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("preferences.json");

    let mut service = SettingsService::new(FileStore::new(&path));
    service.set_offline(false);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(raw[OFFLINE_MODE_KEY], "false");
    assert_eq!(service.store().get(OFFLINE_MODE_KEY).unwrap().as_deref(), Some("false"));
    assert_eq!(service.store().get(LANGUAGE_KEY).unwrap(), None);
}

#[test]
fn corrupt_file_keeps_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{not json").expect("write");

    let store = FileStore::new(&path);
    assert!(matches!(store.get(LANGUAGE_KEY), Err(StoreError::Json(_))));

    let service = SettingsService::load_from(store);
    assert_eq!(service.settings(), Settings::default());
}

#[test]
fn corrupt_file_is_replaced_on_write() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{not json").expect("write");

    let mut service = SettingsService::load_from(FileStore::new(&path));
    service.set_language(Language::Sinhala);

    let reloaded = SettingsService::load_from(FileStore::new(&path));
    assert_eq!(reloaded.language(), Language::Sinhala);
    assert!(!reloaded.is_offline());
}

#[test]
fn failing_backend_is_swallowed() {
    let mut service = SettingsService::load_from(BrokenStore);
    assert_eq!(service.language(), Language::English);
    assert!(!service.is_offline());

    service.set_language(Language::Sinhala);
    service.set_offline(true);

    // In-memory state follows the user even though nothing was persisted
    assert_eq!(service.language(), Language::Sinhala);
    assert!(service.is_offline());
}

#[test]
fn reload_picks_up_external_changes() {
    let mut service = SettingsService::load_from(MemoryStore::new());
    assert_eq!(service.language(), Language::English);

    let mut store = service.into_store();
    store.set(LANGUAGE_KEY, "si").expect("memory store");
    service = SettingsService::new(store);
    service.load();
    assert_eq!(service.language(), Language::Sinhala);
}
