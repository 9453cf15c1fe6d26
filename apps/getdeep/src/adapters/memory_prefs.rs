use std::collections::BTreeSet;

use super::{read_int, read_string_set, PrefsBackend, PrefsEdit, PrefsMap, StoreError};

/// Map-backed preferences. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    map: PrefsMap,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing values, e.g. to simulate a prior session.
    pub fn with_map(map: PrefsMap) -> Self {
        Self { map }
    }

    pub fn as_map(&self) -> &PrefsMap {
        &self.map
    }
}

impl PrefsBackend for MemoryPrefs {
    fn get_int(&self, key: &str) -> Option<i64> {
        read_int(&self.map, key)
    }

    fn get_string_set(&self, key: &str) -> Option<BTreeSet<String>> {
        read_string_set(&self.map, key)
    }

    fn apply(&mut self, edit: PrefsEdit) -> Result<(), StoreError> {
        edit.apply_to(&mut self.map);
        Ok(())
    }
}
