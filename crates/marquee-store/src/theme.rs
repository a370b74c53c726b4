use crate::error::StoreError;
use crate::store::Store;
use marquee_models::DEFAULT_THEME;
use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme-storage";

/// Persisted shape: `{"state":{"currentTheme":"FunkyFlix"},"version":0}`.
#[derive(Debug, Serialize, Deserialize)]
struct ThemeRecord {
    state: ThemeState,
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeState {
    #[serde(rename = "currentTheme")]
    current_theme: String,
}

/// Reads and writes the persisted theme selection.
pub struct ThemeStore {
    store: Store,
}

impl ThemeStore {
    pub(crate) fn new(store: Store) -> Self {
        Self { store }
    }

    /// The stored theme name, falling back to the default when nothing is
    /// stored, the record is damaged, or the name is empty. The name is
    /// returned as stored; it is not checked against the built-in palettes.
    pub fn current(&self) -> String {
        self.current_or(DEFAULT_THEME)
    }

    pub fn current_or(&self, fallback: &str) -> String {
        match self.store.read_optional::<ThemeRecord>(THEME_KEY) {
            Some(record) if !record.state.current_theme.is_empty() => record.state.current_theme,
            _ => fallback.to_string(),
        }
    }

    pub fn set(&self, name: &str) -> Result<(), StoreError> {
        let record = ThemeRecord {
            state: ThemeState {
                current_theme: name.to_string(),
            },
            version: 0,
        };
        self.store.write_value(THEME_KEY, &record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryBackend, StorageBackend};
    use std::sync::Arc;

    fn theme_store() -> (ThemeStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let store = Store::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
        (store.theme(), backend)
    }

    #[test]
    fn test_defaults_to_funkyflix_when_nothing_stored() {
        let (theme, _backend) = theme_store();
        assert_eq!(theme.current(), "FunkyFlix");
    }

    #[test]
    fn test_set_then_current_round_trip() {
        let (theme, _backend) = theme_store();

        theme.set("SunsetPop").unwrap();

        assert_eq!(theme.current(), "SunsetPop");
    }

    #[test]
    fn test_stored_shape_matches_the_persisted_format() {
        let (theme, backend) = theme_store();

        theme.set("SunsetPop").unwrap();

        let raw = backend.get(THEME_KEY).unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"state": {"currentTheme": "SunsetPop"}, "version": 0})
        );
    }

    #[test]
    fn test_corrupt_record_falls_back_to_default() {
        let (theme, backend) = theme_store();
        backend.set(THEME_KEY, "{\"state\":").unwrap();

        assert_eq!(theme.current(), "FunkyFlix");
    }

    #[test]
    fn test_missing_current_theme_field_falls_back() {
        let (theme, backend) = theme_store();
        backend.set(THEME_KEY, "{\"state\":{},\"version\":0}").unwrap();

        assert_eq!(theme.current(), "FunkyFlix");
    }

    #[test]
    fn test_unknown_names_are_returned_as_stored() {
        let (theme, _backend) = theme_store();

        theme.set("NotARealTheme").unwrap();

        assert_eq!(theme.current(), "NotARealTheme");
    }

    #[test]
    fn test_custom_fallback_applies_only_when_unset() {
        let (theme, _backend) = theme_store();

        assert_eq!(theme.current_or("SunsetPop"), "SunsetPop");

        theme.set("FunkyFlix").unwrap();
        assert_eq!(theme.current_or("SunsetPop"), "FunkyFlix");
    }
}
