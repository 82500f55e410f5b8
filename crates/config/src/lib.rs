//! Configuration loading for the inbox-count tools
//!
//! Provides the shared config directory (~/.config/inbox-count/) and a
//! [`PreferenceStore`]: a flat JSON object of option values keyed by string
//! names, mirroring the host platform's shared-preferences file.
//!
//! Call [`init`] at application startup to bootstrap the config directory.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const APP_DIR: &str = "inbox-count";

/// Default preferences filename in the config directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Initialize the config directory.
///
/// Creates ~/.config/inbox-count/ if it doesn't exist.
pub fn init() -> Result<PathBuf> {
    ensure_config_dir()
}

/// Get the config directory (~/.config/inbox-count/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Get the path to a file within the config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("Could not determine config directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    Ok(dir)
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// String-keyed option values backed by a JSON object.
///
/// Values are read leniently: a key holding the wrong JSON type reads as
/// absent so callers fall back to their defaults, the same way a typed
/// preferences API treats a mismatched entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceStore {
    values: Map<String, Value>,
    path: Option<PathBuf>,
}

impl PreferenceStore {
    /// Create an empty, unsaved store
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the store at `path`. A missing file yields an empty store bound
    /// to that path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            log::debug!("No preferences at {}, using defaults", path.display());
            return Ok(Self {
                values: Map::new(),
                path: Some(path),
            });
        }
        let values: Map<String, Value> = load_json_file(&path)?;
        Ok(Self {
            values,
            path: Some(path),
        })
    }

    /// Open the default store in the config directory
    pub fn open_default() -> Result<Self> {
        let path = config_path(PREFERENCES_FILE).context("Could not determine config directory")?;
        Self::open(path)
    }

    /// Parse a store from a JSON object string
    pub fn from_json(json: &str) -> Result<Self> {
        let values: Map<String, Value> =
            serde_json::from_str(json).context("Failed to parse preferences JSON")?;
        Ok(Self { values, path: None })
    }

    /// Path the store saves to, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Read a string set. Non-string members are skipped.
    pub fn get_string_set(&self, key: &str) -> Option<BTreeSet<String>> {
        let items = self.values.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), Value::String(value.into()));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), Value::Bool(value));
    }

    pub fn set_string_set<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        let array = set.into_iter().map(Value::String).collect();
        self.values.insert(key.to_string(), Value::Array(array));
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Write the store back to its file, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .context("Preference store has no backing file")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write preferences: {}", path.display()))?;
        Ok(())
    }
}
