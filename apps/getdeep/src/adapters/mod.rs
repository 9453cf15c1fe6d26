//! Key/value preference backends.
//!
//! The progress repository only talks to [`PrefsBackend`]; the concrete
//! backend is chosen at startup from [`crate::config::StoreProfile`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod file_prefs;
pub mod memory_prefs;

pub use file_prefs::FilePrefs;
pub use memory_prefs::MemoryPrefs;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt preferences file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("preferences file {path} is locked by another process")]
    Locked { path: PathBuf },
}

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Int(i64),
    StringSet(BTreeSet<String>),
}

/// Raw preference map as held by every backend.
pub type PrefsMap = BTreeMap<String, PrefValue>;

/// Batch of writes applied atomically by [`PrefsBackend::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefsEdit {
    clear: bool,
    puts: Vec<(String, PrefValue)>,
}

impl PrefsEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every existing key before the puts are applied.
    pub fn clear(mut self) -> Self {
        self.clear = true;
        self
    }

    pub fn put_int(mut self, key: &str, value: i64) -> Self {
        self.puts.push((key.to_string(), PrefValue::Int(value)));
        self
    }

    pub fn put_string_set(mut self, key: &str, value: BTreeSet<String>) -> Self {
        self.puts.push((key.to_string(), PrefValue::StringSet(value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.clear && self.puts.is_empty()
    }

    /// Apply this edit to an in-memory map.
    pub fn apply_to(&self, map: &mut PrefsMap) {
        if self.clear {
            map.clear();
        }
        for (key, value) in &self.puts {
            map.insert(key.clone(), value.clone());
        }
    }
}

/// Synchronous, write-through preference storage.
pub trait PrefsBackend {
    fn get_int(&self, key: &str) -> Option<i64>;

    fn get_string_set(&self, key: &str) -> Option<BTreeSet<String>>;

    /// Durably apply `edit` before returning. All-or-nothing: on error the
    /// backend's visible state is unchanged.
    fn apply(&mut self, edit: PrefsEdit) -> Result<(), StoreError>;
}

pub(crate) fn read_int(map: &PrefsMap, key: &str) -> Option<i64> {
    match map.get(key) {
        Some(PrefValue::Int(v)) => Some(*v),
        _ => None,
    }
}

pub(crate) fn read_string_set(map: &PrefsMap, key: &str) -> Option<BTreeSet<String>> {
    match map.get(key) {
        Some(PrefValue::StringSet(v)) => Some(v.clone()),
        _ => None,
    }
}

/// Backend selected at runtime.
#[derive(Debug)]
pub enum AnyPrefs {
    Memory(MemoryPrefs),
    File(FilePrefs),
}

impl PrefsBackend for AnyPrefs {
    fn get_int(&self, key: &str) -> Option<i64> {
        match self {
            AnyPrefs::Memory(p) => p.get_int(key),
            AnyPrefs::File(p) => p.get_int(key),
        }
    }

    fn get_string_set(&self, key: &str) -> Option<BTreeSet<String>> {
        match self {
            AnyPrefs::Memory(p) => p.get_string_set(key),
            AnyPrefs::File(p) => p.get_string_set(key),
        }
    }

    fn apply(&mut self, edit: PrefsEdit) -> Result<(), StoreError> {
        match self {
            AnyPrefs::Memory(p) => p.apply(edit),
            AnyPrefs::File(p) => p.apply(edit),
        }
    }
}
