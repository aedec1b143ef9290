//! Persistence adapter for the roster and the settings record.
//!
//! Both records are stored as JSON strings under fixed keys. Reads never
//! fail from the caller's point of view: a missing key, an unavailable store
//! or malformed content all degrade to the empty/default value and are
//! logged. Writes are fire-and-forget.

use crate::defaults::{MEMBERS_KEY, SETTINGS_KEY};
use crate::roster::Participant;
use crate::settings::Settings;
use log::{debug, error, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Failure reported by a [`KeyValueStore`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// String key-value store the roster and settings managers persist into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Browser `localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        gloo_utils::window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// In-memory store, used by tests and as a stand-in when no browser exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn read_raw(store: &impl KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to read '{}' from storage: {}", key, e);
            None
        }
    }
}

fn write_raw(store: &impl KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        error!("Failed to write '{}' to storage: {}", key, e);
    }
}

/// Load the saved roster, or an empty one.
pub fn load_members(store: &impl KeyValueStore) -> Vec<Participant> {
    let Some(raw) = read_raw(store, MEMBERS_KEY) else {
        debug!("No saved roster found");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Participant>>(&raw) {
        Ok(members) => {
            debug!("Loaded {} members from storage", members.len());
            members
        }
        Err(e) => {
            warn!("Saved roster is corrupt ({}), starting empty", e);
            Vec::new()
        }
    }
}

pub fn save_members(store: &impl KeyValueStore, members: &[Participant]) {
    match serde_json::to_string(members) {
        Ok(json) => write_raw(store, MEMBERS_KEY, &json),
        Err(e) => error!("Failed to serialize roster: {}", e),
    }
}

/// Load the saved settings, or the defaults.
///
/// A stored duration outside the accepted range is treated like malformed
/// content.
pub fn load_settings(store: &impl KeyValueStore) -> Settings {
    let Some(raw) = read_raw(store, SETTINGS_KEY) else {
        debug!("No saved settings found, using defaults");
        return Settings::default();
    };

    match serde_json::from_str::<Settings>(&raw) {
        Ok(settings) if Settings::is_valid_duration(settings.timer_duration) => settings,
        Ok(settings) => {
            warn!(
                "Saved timer duration {}s is out of range, using defaults",
                settings.timer_duration
            );
            Settings::default()
        }
        Err(e) => {
            warn!("Saved settings are corrupt ({}), using defaults", e);
            Settings::default()
        }
    }
}

pub fn save_settings(store: &impl KeyValueStore, settings: &Settings) {
    match serde_json::to_string(settings) {
        Ok(json) => write_raw(store, SETTINGS_KEY, &json),
        Err(e) => error!("Failed to serialize settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn members_survive_a_save_and_load() {
        let store = MemoryStore::new();
        let created = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let members = vec![
            Participant::with_timestamp("1", "Test User 1", created),
            Participant::with_timestamp("2", "Test User 2", created),
        ];

        save_members(&store, &members);
        let loaded = load_members(&store);

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "1");
        assert_eq!(loaded[0].name, "Test User 1");
        assert_eq!(loaded[0].created_at, created);
    }

    #[test]
    fn members_use_camel_case_and_iso_timestamps() {
        let store = MemoryStore::new();
        let created = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        save_members(&store, &[Participant::with_timestamp("a", "Ann", created)]);

        let raw = store.raw(MEMBERS_KEY).unwrap();
        assert!(raw.contains("\"createdAt\":\"2023-01-02T03:04:05Z\""));
    }

    #[test]
    fn members_written_by_a_browser_date_are_readable() {
        let store = MemoryStore::new().with_entry(
            MEMBERS_KEY,
            r#"[{"id":"1","name":"Ann","createdAt":"2023-01-01T00:00:00.000Z"}]"#,
        );

        let loaded = load_members(&store);
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded[0].created_at,
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn missing_or_corrupt_members_load_empty() {
        assert!(load_members(&MemoryStore::new()).is_empty());

        let store = MemoryStore::new().with_entry(MEMBERS_KEY, "invalid json");
        assert!(load_members(&store).is_empty());
    }

    #[test]
    fn settings_round_trip_through_the_store() {
        let store = MemoryStore::new();
        save_settings(&store, &Settings { timer_duration: 300 });

        assert_eq!(store.raw(SETTINGS_KEY).unwrap(), r#"{"timerDuration":300}"#);
        assert_eq!(load_settings(&store).timer_duration, 300);
    }

    #[test]
    fn missing_corrupt_or_out_of_range_settings_load_defaults() {
        assert_eq!(load_settings(&MemoryStore::new()).timer_duration, 180);

        let store = MemoryStore::new().with_entry(SETTINGS_KEY, "invalid json");
        assert_eq!(load_settings(&store).timer_duration, 180);

        let store = MemoryStore::new().with_entry(SETTINGS_KEY, r#"{"timerDuration":0}"#);
        assert_eq!(load_settings(&store).timer_duration, 180);
    }

    #[test]
    fn failing_store_degrades_to_defaults() {
        assert!(load_members(&BrokenStore).is_empty());
        assert_eq!(load_settings(&BrokenStore), Settings::default());

        // writes are logged and dropped
        save_members(&BrokenStore, &[]);
        save_settings(&BrokenStore, &Settings::default());
    }
}
