use std::rc::Rc;

use serde_json::Value;

use crate::error::StorageError;
use crate::platform::KeyValueStore;
use crate::utils::{ TimerSettings, TimerSettingsPatch, SETTINGS_KEY };

/// Timer durations, persisted as JSON under `"timerSettings"` after every change.
pub struct SettingsStore {
    settings: TimerSettings,
    storage: Rc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn init(storage: Rc<dyn KeyValueStore>) -> Self {
        let settings = match storage.get_item(SETTINGS_KEY) {
            Some(text) => Self::parse_stored(&text),
            None => TimerSettings::default(),
        };
        log::info!("Timer settings initialized: {:?}", settings);

        Self { settings, storage }
    }

    /// Saved text must be a JSON object; missing fields fall back to defaults.
    fn parse_stored(text: &str) -> TimerSettings {
        match Self::read_record(text) {
            Ok(saved) => TimerSettings::default().merged(&saved),
            Err(e) => {
                log::warn!("Failed to parse saved settings, using defaults: {}", e);
                TimerSettings::default()
            }
        }
    }

    fn read_record(text: &str) -> Result<TimerSettingsPatch, StorageError> {
        match serde_json::from_str::<Value>(text)? {
            record @ Value::Object(_) => Ok(serde_json::from_value(record)?),
            other => Err(StorageError::Serde(format!("expected an object, found {}", other))),
        }
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn update_settings(&mut self, patch: TimerSettingsPatch) {
        self.settings = self.settings.merged(&patch);
        log::debug!("Timer settings updated: {:?}", self.settings);
        self.persist();
    }

    pub fn reset_settings(&mut self) {
        self.settings = TimerSettings::default();
        log::debug!("Timer settings reset to defaults");
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.write_through() {
            log::error!("Failed to persist timer settings: {}", e);
        }
    }

    fn write_through(&self) -> Result<(), StorageError> {
        let text = serde_json::to_string(&self.settings)?;
        self.storage.set_item(SETTINGS_KEY, &text)
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
