// SPDX-License-Identifier: MPL-2.0
//! Durable preference storage for the selected country and locale.
//!
//! Preferences are plain string key/value pairs, read once when a provider
//! mounts and written on every successful selection. The durable backend is
//! a flat `preferences.toml` file in the config directory:
//!
//! ```toml
//! clubup-country = "US"
//! clubup-locale = "fr-FR"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use clubup_locale::config::{FileStore, PreferenceStore, COUNTRY_STORAGE_KEY};
//!
//! let store = FileStore::open_default(None).expect("no config directory");
//! store.set(COUNTRY_STORAGE_KEY, "AU").expect("Failed to save preference");
//! assert_eq!(store.get(COUNTRY_STORAGE_KEY).as_deref(), Some("AU"));
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// String-only key/value storage shared by the providers.
///
/// Values are opaque strings; the providers validate what they read and
/// treat unrecognised values as absent.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Drops every stored preference.
    fn clear(&self) -> Result<()>;
}

/// Preferences held in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given pairs.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            values: RefCell::new(values),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.values.borrow_mut().clear();
        Ok(())
    }
}

/// Preferences persisted to a TOML file.
///
/// The file is read once on [`FileStore::open`] and rewritten on every
/// mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store. Unreadable or unparseable
    /// content is logged and treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = if path.exists() {
            load_from_path(&path).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "ignoring unreadable preferences");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Self {
            path,
            values: RefCell::new(values),
        }
    }

    /// Opens the store in the resolved config directory.
    ///
    /// See [`paths::get_config_dir_with_override`] for the resolution order.
    pub fn open_default(config_dir: Option<PathBuf>) -> Result<Self> {
        paths::get_preferences_path_with_override(config_dir)
            .map(Self::open)
            .ok_or_else(|| Error::Config("unable to determine config directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        save_to_path(&self.values.borrow(), &self.path)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&self, key: &str) -> Result<()> {
        let removed = self.values.borrow_mut().remove(key).is_some();
        if removed {
            self.persist()?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.values.borrow_mut().clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Reads a flat table of string preferences from `path`.
///
/// Non-string values are skipped.
pub fn load_from_path(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content)?;
    Ok(table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect())
}

/// Writes `values` to `path`, creating parent directories as needed.
pub fn save_to_path(values: &BTreeMap<String, String>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(values)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get(COUNTRY_STORAGE_KEY), None);

        store.set(COUNTRY_STORAGE_KEY, "US").unwrap();
        assert_eq!(store.get(COUNTRY_STORAGE_KEY).as_deref(), Some("US"));

        store.remove(COUNTRY_STORAGE_KEY).unwrap();
        assert_eq!(store.get(COUNTRY_STORAGE_KEY), None);
    }

    #[test]
    fn memory_store_clear_drops_everything() {
        let store =
            MemoryStore::with_values([(COUNTRY_STORAGE_KEY, "AU"), (LOCALE_STORAGE_KEY, "fr-FR")]);
        store.clear().unwrap();
        assert_eq!(store.get(COUNTRY_STORAGE_KEY), None);
        assert_eq!(store.get(LOCALE_STORAGE_KEY), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(paths::PREFERENCES_FILE);

        let store = FileStore::open(&path);
        store.set(COUNTRY_STORAGE_KEY, "CA").expect("failed to save");
        store.set(LOCALE_STORAGE_KEY, "fr-FR").expect("failed to save");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(COUNTRY_STORAGE_KEY).as_deref(), Some("CA"));
        assert_eq!(reopened.get(LOCALE_STORAGE_KEY).as_deref(), Some("fr-FR"));
    }

    #[test]
    fn file_store_treats_invalid_toml_as_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(paths::PREFERENCES_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let store = FileStore::open(&path);
        assert_eq!(store.get(COUNTRY_STORAGE_KEY), None);

        store.set(COUNTRY_STORAGE_KEY, "GB").expect("write should replace bad file");
        assert_eq!(
            load_from_path(&path).unwrap().get(COUNTRY_STORAGE_KEY).map(String::as_str),
            Some("GB")
        );
    }

    #[test]
    fn load_from_path_skips_non_string_values() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(paths::PREFERENCES_FILE);
        fs::write(&path, "clubup-country = 42\nclubup-locale = \"de-DE\"\n").unwrap();

        let values = load_from_path(&path).unwrap();
        assert!(!values.contains_key(COUNTRY_STORAGE_KEY));
        assert_eq!(values.get(LOCALE_STORAGE_KEY).map(String::as_str), Some("de-DE"));
    }

    #[test]
    fn file_store_clear_removes_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(paths::PREFERENCES_FILE);
        let store = FileStore::open(&path);
        store.set(COUNTRY_STORAGE_KEY, "EU").unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(FileStore::open(&path).get(COUNTRY_STORAGE_KEY), None);
    }

    #[test]
    fn open_default_honours_override_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::open_default(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(store.path(), temp_dir.path().join(paths::PREFERENCES_FILE));
    }
}
