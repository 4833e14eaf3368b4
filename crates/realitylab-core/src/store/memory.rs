//! In-memory backend.

use std::collections::BTreeMap;

use super::KeyValueBackend;
use crate::error::Result;

/// Process-local backend over a `BTreeMap`. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a key, bypassing the store.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Overwrites a raw value, bypassing the store and its quota.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn commit(&mut self, sets: &[(&str, String)], removes: &[&str]) -> Result<()> {
        for (key, value) in sets {
            self.entries.insert((*key).to_string(), value.clone());
        }
        for key in removes {
            self.entries.remove(*key);
        }
        Ok(())
    }

    fn usage(&self) -> Result<usize> {
        Ok(self.entries.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}
