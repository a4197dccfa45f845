//! Internal key identifiers as they appear in the input header.

use crate::constants::DEFINE_PREFIX;
use anyhow::Result;
use serde::{Serialize, Serializer};
use std::fmt;

/// A key constant defined by the internal input header (e.g. `CACAO_KEY_SPACE`).
///
/// # Validation
///
/// - Must start with `CACAO_KEY_`
/// - The remainder must be non-empty and contain only `A-Z`, `0-9` and `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Creates a new CanonicalKey with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use keycvt::models::CanonicalKey;
    ///
    /// let key = CanonicalKey::new("CACAO_KEY_LEFT_SHIFT").unwrap();
    /// assert_eq!(key.base(), "LEFT_SHIFT");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing the key prefix or contains
    /// characters outside `A-Z`, `0-9` and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let Some(base) = name.strip_prefix(DEFINE_PREFIX) else {
            anyhow::bail!("Key name '{name}' must start with {DEFINE_PREFIX}");
        };

        if base.is_empty() {
            anyhow::bail!("Key name '{name}' has nothing after {DEFINE_PREFIX}");
        }

        if !base
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            anyhow::bail!("Key name '{name}' may only contain A-Z, 0-9 and underscores");
        }

        Ok(Self(name))
    }

    /// Full identifier, prefix included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier with the `CACAO_KEY_` prefix stripped (e.g. `KP_ENTER`).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.0[DEFINE_PREFIX.len()..]
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_key() {
        let key = CanonicalKey::new("CACAO_KEY_F12").unwrap();
        assert_eq!(key.as_str(), "CACAO_KEY_F12");
        assert_eq!(key.base(), "F12");
    }

    #[test]
    fn test_new_rejects_missing_prefix() {
        assert!(CanonicalKey::new("KEY_A").is_err());
        assert!(CanonicalKey::new("cacao_key_a").is_err());
    }

    #[test]
    fn test_new_rejects_empty_base() {
        assert!(CanonicalKey::new("CACAO_KEY_").is_err());
    }

    #[test]
    fn test_new_rejects_lowercase_base() {
        assert!(CanonicalKey::new("CACAO_KEY_Space").is_err());
    }

    #[test]
    fn test_display_is_full_name() {
        let key = CanonicalKey::new("CACAO_KEY_KP_ENTER").unwrap();
        assert_eq!(key.to_string(), "CACAO_KEY_KP_ENTER");
    }

    #[test]
    fn test_serializes_as_string() {
        let key = CanonicalKey::new("CACAO_KEY_A").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"CACAO_KEY_A\"");
    }
}
