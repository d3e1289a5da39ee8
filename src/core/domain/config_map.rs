//! ConfigMap type.
//!
//! The resolved name/value mapping of one env file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::types::{Assignment, VarName};

/// Resolved variables of an env file, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: Vec<(VarName, String)>,
    index: HashMap<VarName, usize>,
    failures: Vec<VarName>,
    source: Option<PathBuf>,
}

impl ConfigMap {
    /// An empty map with no source file
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty map built from `path`
    pub fn from_source(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            ..Self::default()
        }
    }

    /// Set a variable. A repeated name replaces the value in place.
    pub fn insert(&mut self, name: impl Into<VarName>, value: impl Into<String>) {
        let name = name.into();
        self.failures.retain(|failed| *failed != name);
        self.set(name, value.into());
    }

    /// Set a variable whose encrypted value could not be recovered.
    ///
    /// The value reads as the empty string and the name is listed by
    /// [`ConfigMap::failures`].
    pub fn insert_failed(&mut self, name: impl Into<VarName>) {
        let name = name.into();
        if !self.failures.contains(&name) {
            self.failures.push(name.clone());
        }
        self.set(name, String::new());
    }

    fn set(&mut self, name: VarName, value: String) {
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Whether `name` is present
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries as name/value pairs
    pub fn entries(&self) -> &[(VarName, String)] {
        &self.entries
    }

    /// Entries formatted as `NAME=value`
    pub fn assignments(&self) -> Vec<Assignment> {
        self.entries()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect()
    }

    /// Names whose encrypted value failed to decode or decrypt
    pub fn failures(&self) -> &[VarName] {
        &self.failures
    }

    /// File the map was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ConfigMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, value) in entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
