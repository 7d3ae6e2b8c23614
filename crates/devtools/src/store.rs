//! File-backed [`PreferenceStore`]: a flat JSON object of string values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use devtools_core::prefs::{PreferenceStore, Preferences, PrefsError};

use crate::prelude::{eprintln, *};

const PREFS_DIR: &str = "devtools";
const PREFS_FILE: &str = "preferences.json";

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Load `path`. A missing or unreadable file starts out empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring malformed preferences file {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) => {
                log::debug!("no preferences at {}: {e}", path.display());
                BTreeMap::new()
            }
        };

        JsonFileStore { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json).map_err(|e| PrefsError::Storage(e.to_string()))
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn entries(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join(PREFS_DIR).join(PREFS_FILE))
}

/// Open the preferences selected by `--prefs-file` or the default location.
pub fn open_preferences(global: &crate::Global) -> Result<Preferences<JsonFileStore>> {
    let path = global
        .prefs_file
        .clone()
        .or_else(default_path)
        .ok_or_else(|| Error::Preferences("cannot determine the config directory".into()))?;

    if global.verbose {
        eprintln!("Preferences: {}", path.display());
    }

    Ok(Preferences::new(JsonFileStore::open(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nope.json"));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = Preferences::new(JsonFileStore::open(&path));
        prefs.record_search("json");
        prefs.record_search("hex");
        prefs.set_source_category("color");

        let reopened = Preferences::new(JsonFileStore::open(&path));
        assert_eq!(reopened.recent_searches(), vec!["hex", "json"]);
        assert_eq!(reopened.source_category().as_deref(), Some("color"));
    }

    #[test]
    fn test_file_is_flat_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = JsonFileStore::open(&path);
        store.set("search_query", "base64").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["search_query"], "base64");
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_reset_removes_keys_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = Preferences::new(JsonFileStore::open(&path));
        prefs.record_search("uuid");
        prefs.reset();

        let reopened = JsonFileStore::open(&path);
        assert!(reopened.entries().is_empty());
    }
}
