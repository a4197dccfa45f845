//! Per-key manual overrides.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Explicit replacements that bypass rule-based derivation.
///
/// Keys are full canonical names (`CACAO_KEY_GRAVE_ACCENT`). Inserting a key
/// twice keeps the later value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct OverrideMap {
    entries: HashMap<String, String>,
}

/// An override line that is not exactly `KEY external_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntryError {
    /// Number of whitespace-separated tokens found on the line
    pub token_count: usize,
}

impl fmt::Display for OverrideEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Format must be: CACAO_KEY_NAME external_name (got {} tokens)",
            self.token_count
        )
    }
}

impl std::error::Error for OverrideEntryError {}

impl OverrideMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one `CACAO_KEY_NAME external_name` line.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideEntryError`] unless the line splits into exactly two
    /// whitespace-separated tokens.
    pub fn parse_entry(line: &str) -> Result<(String, String), OverrideEntryError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [key, external] => Ok(((*key).to_string(), (*external).to_string())),
            _ => Err(OverrideEntryError {
                token_count: tokens.len(),
            }),
        }
    }

    /// Adds or replaces an override.
    pub fn insert(&mut self, key: impl Into<String>, external: impl Into<String>) {
        self.entries.insert(key.into(), external.into());
    }

    /// Looks up the override for a canonical key name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterates over overridden key names, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, external) in iter {
            map.insert(key, external);
        }
        map
    }
}
