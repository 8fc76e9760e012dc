// Local persistence for the optional Places API key
use crate::model::SettingsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    places_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved key, if any. A missing settings file means no key.
    pub fn api_key(&self) -> Result<Option<String>, SettingsError> {
        Ok(self.load()?.places_api_key)
    }

    /// Saves the trimmed key. An empty key removes the saved one.
    pub fn set_api_key(&self, key: &str) -> Result<(), SettingsError> {
        let key = key.trim();
        if key.is_empty() {
            return self.clear_api_key();
        }
        let mut settings = self.load()?;
        settings.places_api_key = Some(key.to_string());
        settings.updated_at = Some(Utc::now());
        self.save(&settings)?;
        info!("Places API key saved to {}", self.path.display());
        Ok(())
    }

    pub fn clear_api_key(&self) -> Result<(), SettingsError> {
        let mut settings = self.load()?;
        settings.places_api_key = None;
        settings.updated_at = Some(Utc::now());
        self.save(&settings)?;
        info!("Places API key removed from {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<StoredSettings, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StoredSettings::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, settings: &StoredSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.api_key().unwrap(), None);
    }

    #[test]
    fn key_is_trimmed_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        SettingsStore::new(&path).set_api_key("  AIza-test-key \n").unwrap();
        let reopened = SettingsStore::new(&path);
        assert_eq!(reopened.api_key().unwrap().as_deref(), Some("AIza-test-key"));
    }

    #[test]
    fn empty_key_clears_saved_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        store.set_api_key("AIza-test-key").unwrap();
        store.set_api_key("   ").unwrap();
        assert_eq!(store.api_key().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(SettingsStore::new(&path).api_key(), Err(SettingsError::Json(_))));
    }
}
