//! Key define extraction from the internal input header.
//!
//! Scans `#define CACAO_KEY_*` lines and returns the identifiers in the order
//! they appear. The order defines the order of the generated table.

use crate::constants::{APP_BINARY_NAME, DEFAULT_HEADER_PATH, HEADER_KEY_PATTERN};
use crate::models::CanonicalKey;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Compiled matcher for key define lines.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    define_regex: Regex,
}

impl KeyExtractor {
    /// Compiles the define pattern.
    pub fn new() -> Result<Self> {
        let define_regex =
            Regex::new(HEADER_KEY_PATTERN).context("Failed to compile key define pattern")?;
        Ok(Self { define_regex })
    }

    /// Extracts every key define from header text, in line order.
    ///
    /// Lines that do not define a key are skipped. A header without any key
    /// defines yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use keycvt::parser::KeyExtractor;
    ///
    /// let extractor = KeyExtractor::new().unwrap();
    /// let keys = extractor.extract("#define CACAO_KEY_A 65\n#define OTHER 1\n");
    /// assert_eq!(keys.len(), 1);
    /// assert_eq!(keys[0].as_str(), "CACAO_KEY_A");
    /// ```
    #[must_use]
    pub fn extract(&self, content: &str) -> Vec<CanonicalKey> {
        content
            .lines()
            .filter_map(|line| self.define_regex.captures(line))
            .filter_map(|captures| CanonicalKey::new(&captures[1]).ok())
            .collect()
    }
}

/// Extracts key defines from header text.
pub fn extract_keys(content: &str) -> Result<Vec<CanonicalKey>> {
    Ok(KeyExtractor::new()?.extract(content))
}

/// Reads a header file and extracts its key defines.
pub fn read_header_keys(path: &Path) -> Result<Vec<CanonicalKey>> {
    if !path.exists() {
        anyhow::bail!(
            "Header file not found: {}\n\n\
             Pass the path to the CACAO input header, e.g. {} generate {}",
            path.display(),
            APP_BINARY_NAME,
            DEFAULT_HEADER_PATH
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read header file: {}", path.display()))?;

    let keys = extract_keys(&content)?;
    tracing::debug!(path = %path.display(), count = keys.len(), "Extracted key defines");

    Ok(keys)
}
