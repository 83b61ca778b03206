//! User preferences: display language and offline mode
//!
//! [`SettingsService`] keeps the current values in memory and mirrors every change
//! into a [`PreferenceStore`]. Storage failures are logged and swallowed; the
//! in-memory value always reflects the user's latest choice.

use logger::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Storage key of the language preference
pub const LANGUAGE_KEY: &str = "language";

/// Storage key of the offline flag (value is JSON `true`/`false`)
pub const OFFLINE_MODE_KEY: &str = "offlineMode";

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// Sinhala
    #[serde(rename = "si")]
    Sinhala,
}

impl Language {
    /// Stored code (`"en"` or `"si"`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Sinhala => "si",
        }
    }

    /// Name shown in the language toggle
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Sinhala => "Sinhala",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Self::English),
            "si" => Ok(Self::Sinhala),
            other => Err(format!("Unknown language '{other}' (expected 'en' or 'si')")),
        }
    }
}

/// Snapshot of every preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Settings {
    /// Display language
    pub language: Language,
    /// Show cached data only
    pub offline: bool,
}

/// Failure of a preference backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object of strings
    #[error("preference storage is corrupt: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend refused the operation
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed preference storage
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if absent
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend persisting all entries as one JSON object in a file
///
/// A missing file reads as empty; writes create parent directories as needed.
/// A write over a file that is not a JSON object of strings starts it afresh.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Json(e)) => {
                warn!(
                    "Replacing unreadable preferences file {}: {e}",
                    self.path.display()
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Cached preferences over an injected store
#[derive(Debug)]
pub struct SettingsService<S: PreferenceStore> {
    store: S,
    current: Settings,
}

impl<S: PreferenceStore> SettingsService<S> {
    /// Service with default settings (English, online); nothing is read yet
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Settings::default(),
        }
    }

    /// Service that has already loaded persisted values
    pub fn load_from(store: S) -> Self {
        let mut service = Self::new(store);
        service.load();
        service
    }

    /// Refresh the cache from the store
    ///
    /// Read failures and unparseable values are logged and leave the current
    /// value in place.
    pub fn load(&mut self) {
        match self.store.get(LANGUAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<Language>() {
                Ok(language) => self.current.language = language,
                Err(e) => warn!("Ignoring stored language: {e}"),
            },
            Ok(None) => debug!("No stored language; keeping {}", self.current.language),
            Err(e) => error!("Error loading settings: {e}"),
        }

        match self.store.get(OFFLINE_MODE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(offline) => self.current.offline = offline,
                Err(e) => warn!("Ignoring stored offline mode '{raw}': {e}"),
            },
            Ok(None) => debug!("No stored offline mode; keeping {}", self.current.offline),
            Err(e) => error!("Error loading settings: {e}"),
        }
    }

    /// Current display language
    pub const fn language(&self) -> Language {
        self.current.language
    }

    /// Whether offline mode is on
    pub const fn is_offline(&self) -> bool {
        self.current.offline
    }

    /// Snapshot of all preferences
    pub const fn settings(&self) -> Settings {
        self.current
    }

    /// Switch language; persisted best-effort
    pub fn set_language(&mut self, language: Language) {
        self.current.language = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            error!("Error saving language: {e}");
        }
    }

    /// Toggle offline mode; persisted best-effort as JSON
    pub fn set_offline(&mut self, offline: bool) {
        self.current.offline = offline;
        let encoded = match serde_json::to_string(&offline) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!("Error saving offline mode: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(OFFLINE_MODE_KEY, &encoded) {
            error!("Error saving offline mode: {e}");
        }
    }

    /// Borrow the backing store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backing store
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_load() {
        let service = SettingsService::new(MemoryStore::with_entries([(LANGUAGE_KEY, "si")]));
        assert_eq!(service.language(), Language::English);
        assert!(!service.is_offline());
    }

    #[test]
    fn test_load_reads_both_keys() {
        let store = MemoryStore::with_entries([(LANGUAGE_KEY, "si"), (OFFLINE_MODE_KEY, "true")]);
        let service = SettingsService::load_from(store);
        assert_eq!(service.language(), Language::Sinhala);
        assert!(service.is_offline());
    }

    #[test]
    fn test_invalid_values_keep_previous() {
        let store =
            MemoryStore::with_entries([(LANGUAGE_KEY, "fr"), (OFFLINE_MODE_KEY, "maybe")]);
        let service = SettingsService::load_from(store);
        assert_eq!(service.settings(), Settings::default());
    }

    #[test]
    fn test_set_writes_through() {
        let mut service = SettingsService::new(MemoryStore::new());
        service.set_language(Language::Sinhala);
        service.set_offline(true);

        let store = service.into_store();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("si"));
        assert_eq!(store.get(OFFLINE_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!(Language::Sinhala.to_string(), "si");
        assert_eq!(Language::Sinhala.display_name(), "Sinhala");
        assert!("EN".parse::<Language>().is_err());
    }
}
