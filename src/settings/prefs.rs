//! Settings domain: durable string-keyed preference storage backed by RON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for preference file failures.
#[derive(Debug)]
pub struct PrefsError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to read {}: {}", self.file, self.message)
    }
}

/// A single stored preference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PrefValue {
    Float(f32),
    Bool(bool),
}

/// String-keyed float/bool store persisted as a RON map on disk.
///
/// A store built with [`PrefsStore::in_memory`] has no backing file and
/// `flush` is a no-op; tests use that form.
#[derive(Resource, Debug, Default)]
pub struct PrefsStore {
    values: BTreeMap<String, PrefValue>,
    path: Option<PathBuf>,
}

impl PrefsStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store from disk. A missing or unreadable file degrades to
    /// an empty store so every key falls back to its default.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_prefs_file(&path) {
            Ok(values) => values,
            Err(e) => {
                warn!("{}", e);
                BTreeMap::new()
            }
        };
        Self {
            values,
            path: Some(path),
        }
    }

    /// Returns the stored float for `key`, or `default` when the key is
    /// absent or holds a value of the wrong type.
    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        match self.values.get(key) {
            Some(PrefValue::Float(v)) => *v,
            _ => default,
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(PrefValue::Bool(v)) => *v,
            _ => default,
        }
    }

    pub fn set_f32(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), PrefValue::Float(value));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), PrefValue::Bool(value));
    }

    /// Write the store to its backing file. In-memory stores skip this.
    pub fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };
        match ron::ser::to_string_pretty(&self.values, ron::ser::PrettyConfig::default()) {
            Ok(text) => {
                if let Err(e) = fs::write(path, text) {
                    warn!("Failed to write prefs file {}: {}", path.display(), e);
                }
            }
            Err(e) => warn!("Failed to serialize prefs: {}", e),
        }
    }
}

fn read_prefs_file(path: &Path) -> Result<BTreeMap<String, PrefValue>, PrefsError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| PrefsError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;
    ron::from_str(&contents).map_err(|e| PrefsError {
        file,
        message: format!("Parse error: {}", e),
    })
}
