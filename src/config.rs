//! Rules file loading.
//!
//! A rules file supplies the same answers as the interactive wizard, in TOML:
//!
//! ```toml
//! external_prefix = "XKB_KEY"
//! key_case = "lower"
//! control_case = "capitalized"
//! keypad_prefix = "KP"
//! enter_name = "return"
//! direction_pattern = "D_K"
//!
//! [overrides]
//! CACAO_KEY_GRAVE_ACCENT = "XKB_KEY_grave"
//! ```
//!
//! Every field is optional; a missing field behaves like an empty answer.
//! Unknown top-level keys are ignored with a warning. Rules files are only
//! ever read.

use crate::models::{NamingConfig, OverrideMap};
use crate::wizard::Rules;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level keys a rules file may contain.
pub const RULES_FILE_KEYS: &[&str] = &[
    "external_prefix",
    "key_case",
    "control_case",
    "keypad_prefix",
    "enter_name",
    "direction_pattern",
    "overrides",
];

/// On-disk layout of a rules file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RulesFile {
    /// Naming convention, flattened to the top level
    #[serde(flatten)]
    pub naming: NamingConfig,
    /// Per-key replacements
    pub overrides: OverrideMap,
}

impl RulesFile {
    /// Parses rules from TOML text, warning about unknown top-level keys.
    pub fn parse(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).context("Failed to parse rules file")?;
        for key in unknown_keys(&table) {
            tracing::warn!(key, "Ignoring unknown rules file key");
        }

        toml::from_str(content).context("Failed to parse rules file")
    }

    /// Loads rules from a TOML file.
    ///
    /// A read failure keeps the underlying [`std::io::Error`] in the error
    /// chain, so callers can tell it apart from a parse failure with
    /// `downcast_ref`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid rules file: {}", path.display()))
    }
}

/// Top-level keys of a parsed rules file that [`RulesFile`] does not know.
#[must_use]
pub fn unknown_keys(table: &toml::Table) -> Vec<&str> {
    table
        .keys()
        .map(String::as_str)
        .filter(|key| !RULES_FILE_KEYS.contains(key))
        .collect()
}

impl From<RulesFile> for Rules {
    fn from(file: RulesFile) -> Self {
        Self {
            naming: file.naming,
            overrides: file.overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capitalization, EnterName};
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_file() {
        let content = r#"
external_prefix = "XKB_KEY"
key_case = "lower"
control_case = "capitalized"
keypad_prefix = "KP"
enter_name = "return"
direction_pattern = "D_K"

[overrides]
CACAO_KEY_GRAVE_ACCENT = "XKB_KEY_grave"
"#;
        let rules = RulesFile::parse(content).unwrap();
        assert_eq!(rules.naming.external_prefix, "XKB_KEY");
        assert_eq!(rules.naming.key_case, Capitalization::Lower);
        assert_eq!(rules.naming.control_case, Capitalization::Capitalized);
        assert_eq!(rules.naming.keypad_prefix, "KP");
        assert_eq!(rules.naming.enter_name, EnterName::Return);
        assert_eq!(rules.naming.direction_pattern.as_str(), "D_K");
        assert_eq!(
            rules.overrides.get("CACAO_KEY_GRAVE_ACCENT"),
            Some("XKB_KEY_grave")
        );
    }

    #[test]
    fn test_parse_empty_file_is_default() {
        let rules = RulesFile::parse("").unwrap();
        assert_eq!(rules, RulesFile::default());
    }

    #[test]
    fn test_parse_unknown_mode_degrades() {
        let rules = RulesFile::parse("key_case = \"camel\"\nenter_name = \"ret\"\n").unwrap();
        assert_eq!(rules.naming.key_case, Capitalization::Verbatim);
        assert_eq!(rules.naming.enter_name, EnterName::Enter);
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(RulesFile::parse("external_prefix = ").is_err());
        assert!(RulesFile::parse("key_case = 3").is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rules.toml");
        fs::write(&path, "external_prefix = \"KEY\"\n").unwrap();

        let rules: Rules = RulesFile::load(&path).unwrap().into();
        assert_eq!(rules.naming.external_prefix, "KEY");
        assert!(rules.overrides.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = RulesFile::load(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read rules file"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_load_invalid_toml_is_not_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rules.toml");
        fs::write(&path, "key_case = [\"upper\"]\n").unwrap();

        let err = RulesFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid rules file"));
        assert!(err.downcast_ref::<std::io::Error>().is_none());
    }

    #[test]
    fn test_unknown_keys_reported() {
        let table: toml::Table =
            toml::from_str("keycase = \"upper\"\nkey_case = \"lower\"\n[overrides]\n").unwrap();
        assert_eq!(unknown_keys(&table), vec!["keycase"]);

        // Unknown keys do not stop parsing
        let rules = RulesFile::parse("keycase = \"upper\"\n").unwrap();
        assert_eq!(rules.naming.key_case, Capitalization::Verbatim);
    }

    #[test]
    fn test_every_naming_field_is_a_known_key() {
        let table: toml::Table = toml::from_str(
            r#"
external_prefix = "KEY"
key_case = "upper"
control_case = "upper"
keypad_prefix = "KP"
enter_name = "enter"
direction_pattern = "D_K"

[overrides]
CACAO_KEY_A = "A"
"#,
        )
        .unwrap();
        assert!(unknown_keys(&table).is_empty());
    }
}
