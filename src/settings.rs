//! Timer settings and their manager.

use crate::defaults::{MAX_TIMER_DURATION_SECS, MIN_TIMER_DURATION_SECS, TIMER_DURATION_SECS};
use crate::storage::{self, KeyValueStore};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Speaking time per person, in seconds.
    pub timer_duration: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timer_duration: TIMER_DURATION_SECS,
        }
    }
}

impl Settings {
    pub fn is_valid_duration(seconds: u32) -> bool {
        (MIN_TIMER_DURATION_SECS..=MAX_TIMER_DURATION_SECS).contains(&seconds)
    }
}

/// Owner of the persisted [`Settings`] record.
#[derive(Debug)]
pub struct SettingsManager<S: KeyValueStore> {
    store: S,
    settings: Settings,
}

impl<S: KeyValueStore> SettingsManager<S> {
    pub fn load(store: S) -> Self {
        let settings = storage::load_settings(&store);
        info!("Timer duration is {}s", settings.timer_duration);
        Self { store, settings }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Set the timer duration. Values outside 1..=3600 are ignored; the
    /// return value says whether the update was taken.
    pub fn update(&mut self, timer_duration: u32) -> bool {
        if !Settings::is_valid_duration(timer_duration) {
            debug!("Ignoring out-of-range timer duration {}s", timer_duration);
            return false;
        }
        self.settings = Settings { timer_duration };
        self.persist();
        true
    }

    pub fn reset_to_defaults(&mut self) {
        self.settings = Settings::default();
        self.persist();
    }

    fn persist(&self) {
        storage::save_settings(&self.store, &self.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::SETTINGS_KEY;
    use crate::storage::MemoryStore;
    use std::rc::Rc;

    fn manager() -> (Rc<MemoryStore>, SettingsManager<Rc<MemoryStore>>) {
        let store = Rc::new(MemoryStore::new());
        let manager = SettingsManager::load(store.clone());
        (store, manager)
    }

    #[test]
    fn defaults_to_three_minutes() {
        let (_, manager) = manager();
        assert_eq!(manager.settings().timer_duration, 180);
    }

    #[test]
    fn accepts_the_inclusive_range() {
        let (store, mut manager) = manager();

        assert!(manager.update(1));
        assert_eq!(manager.settings().timer_duration, 1);
        assert!(manager.update(3600));
        assert_eq!(manager.settings().timer_duration, 3600);
        assert_eq!(storage::load_settings(&store).timer_duration, 3600);
    }

    #[test]
    fn silently_ignores_out_of_range_values() {
        let (store, mut manager) = manager();

        assert!(!manager.update(0));
        assert!(!manager.update(3601));
        assert_eq!(manager.settings().timer_duration, 180);
        assert!(store.raw(SETTINGS_KEY).is_none());
    }

    #[test]
    fn reset_restores_and_persists_the_default() {
        let (store, mut manager) = manager();
        manager.update(600);

        manager.reset_to_defaults();
        assert_eq!(manager.settings(), Settings::default());
        assert_eq!(store.raw(SETTINGS_KEY).as_deref(), Some(r#"{"timerDuration":180}"#));
    }

    #[test]
    fn picks_up_a_previously_saved_value() {
        let store = MemoryStore::new().with_entry(SETTINGS_KEY, r#"{"timerDuration":300}"#);
        let manager = SettingsManager::load(store);
        assert_eq!(manager.settings().timer_duration, 300);
    }
}
