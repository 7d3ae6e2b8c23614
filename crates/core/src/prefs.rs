//! UI preference persistence.
//!
//! [`PreferenceStore`] is the storage port; the shell injects a file-backed
//! implementation and tests use [`MemoryStore`]. [`Preferences`] layers typed,
//! best-effort accessors on top: write failures are logged and dropped, and
//! values that fail to parse read as absent.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

pub const KEY_EXPANDED_CATEGORIES: &str = "expanded_categories";
pub const KEY_SEARCH_QUERY: &str = "search_query";
pub const KEY_SCROLL_POSITION: &str = "scroll_position";
pub const KEY_LAST_VISIT: &str = "last_visit";
pub const KEY_SOURCE_CATEGORY: &str = "source_category";
pub const KEY_RECENT_SEARCHES: &str = "recent_searches";

pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Preference encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
    fn remove(&mut self, key: &str) -> Result<(), PrefsError>;
    /// Every stored key/value pair.
    fn entries(&self) -> BTreeMap<String, String>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        self.values.remove(key);
        Ok(())
    }

    fn entries(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

/// Push `query` to the front of `recent`, dropping any earlier copy and
/// anything past [`MAX_RECENT_SEARCHES`]. Blank queries are ignored.
pub fn push_recent(recent: &[String], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return recent.to_vec();
    }

    std::iter::once(query.to_string())
        .chain(recent.iter().filter(|q| q.as_str() != query).cloned())
        .take(MAX_RECENT_SEARCHES)
        .collect()
}

pub struct Preferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Preferences { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::debug!("dropping preference write for {key}: {e}");
        }
    }

    fn clear(&mut self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            log::debug!("dropping preference removal for {key}: {e}");
        }
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        serde_json::from_str(&raw)
            .map_err(|e| log::debug!("ignoring malformed preference {key}: {e}"))
            .ok()
    }

    fn write_json<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write(key, &raw),
            Err(e) => log::debug!("dropping preference write for {key}: {e}"),
        }
    }

    pub fn expanded_categories(&self) -> Vec<String> {
        self.read_json(KEY_EXPANDED_CATEGORIES).unwrap_or_default()
    }

    pub fn set_expanded_categories(&mut self, categories: &[String]) {
        self.write_json(KEY_EXPANDED_CATEGORIES, &categories);
    }

    /// Flip a category between expanded and collapsed; returns whether it
    /// is expanded afterwards.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        let mut expanded = self.expanded_categories();
        let now_expanded = if let Some(pos) = expanded.iter().position(|c| c == category) {
            expanded.remove(pos);
            false
        } else {
            expanded.push(category.to_string());
            true
        };
        self.set_expanded_categories(&expanded);
        now_expanded
    }

    pub fn search_query(&self) -> Option<String> {
        self.store.get(KEY_SEARCH_QUERY)
    }

    pub fn set_search_query(&mut self, query: &str) {
        if query.is_empty() {
            self.clear(KEY_SEARCH_QUERY);
        } else {
            self.write(KEY_SEARCH_QUERY, query);
        }
    }

    pub fn scroll_position(&self) -> Option<f64> {
        self.store.get(KEY_SCROLL_POSITION)?.parse().ok()
    }

    pub fn set_scroll_position(&mut self, position: f64) {
        self.write(KEY_SCROLL_POSITION, &position.to_string());
    }

    pub fn last_visit(&self) -> Option<DateTime<Utc>> {
        let raw = self.store.get(KEY_LAST_VISIT)?;
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn set_last_visit(&mut self, at: DateTime<Utc>) {
        self.write(KEY_LAST_VISIT, &at.to_rfc3339());
    }

    pub fn source_category(&self) -> Option<String> {
        self.store.get(KEY_SOURCE_CATEGORY)
    }

    pub fn set_source_category(&mut self, category: &str) {
        self.write(KEY_SOURCE_CATEGORY, category);
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.read_json(KEY_RECENT_SEARCHES).unwrap_or_default()
    }

    pub fn record_search(&mut self, query: &str) {
        let recent = push_recent(&self.recent_searches(), query);
        self.write_json(KEY_RECENT_SEARCHES, &recent);
    }

    pub fn clear_recent_searches(&mut self) {
        self.clear(KEY_RECENT_SEARCHES);
    }

    pub fn reset(&mut self) {
        for key in [
            KEY_EXPANDED_CATEGORIES,
            KEY_SEARCH_QUERY,
            KEY_SCROLL_POSITION,
            KEY_LAST_VISIT,
            KEY_SOURCE_CATEGORY,
            KEY_RECENT_SEARCHES,
        ] {
            self.clear(key);
        }
    }
}
