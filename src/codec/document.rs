//! Ordered key/value store produced by the parser

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::HashMap;

/// A single `(section, key) = value` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniEntry {
    pub section: String,
    pub key: String,
    pub value: String,
}

/// Parsed INI content: `(section, key) -> value` in first-seen order.
///
/// Section names and keys are compared as exact, case-sensitive strings.
/// Entries that appear before any `[section]` header live in the empty-string
/// section. Re-inserting an existing `(section, key)` replaces the value but
/// keeps the entry at its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    entries: Vec<IniEntry>,
    index: HashMap<(String, String), usize>,
}

impl IniDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the raw value stored under `(section, key)`
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.index
            .get(&(section.to_string(), key.to_string()))
            .map(|&i| self.entries[i].value.as_str())
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let section = section.into();
        let key = key.into();
        let value = value.into();

        match self.index.get(&(section.clone(), key.clone())) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].value, value)),
            None => {
                self.index.insert((section.clone(), key.clone()), self.entries.len());
                self.entries.push(IniEntry {
                    section,
                    key,
                    value,
                });
                None
            }
        }
    }

    /// Remove an entry, returning its value
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        let pos = self.index.remove(&(section.to_string(), key.to_string()))?;
        let removed = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed.value)
    }

    /// True if at least one entry belongs to `section`
    pub fn has_section(&self, section: &str) -> bool {
        self.entries.iter().any(|e| e.section == section)
    }

    /// Distinct section names in first-seen order
    pub fn sections(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.section.as_str()) {
                seen.push(&entry.section);
            }
        }
        seen
    }

    /// `(key, value)` pairs of one section, in document order
    pub fn section_entries<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.section == section)
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    /// All entries in document order
    pub fn iter(&self) -> impl Iterator<Item = &IniEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a IniDocument {
    type Item = &'a IniEntry;
    type IntoIter = std::slice::Iter<'a, IniEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serializes as `{ section: { key: value } }`, preserving document order.
impl Serialize for IniDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Section<'a>(&'a IniDocument, &'a str);

        impl Serialize for Section<'_> {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in self.0.section_entries(self.1) {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }

        let sections = self.sections();
        let mut map = serializer.serialize_map(Some(sections.len()))?;
        for section in sections {
            map.serialize_entry(section, &Section(self, section))?;
        }
        map.end()
    }
}
