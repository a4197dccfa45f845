//! Output records of the mapping engine.

use crate::models::CanonicalKey;
use serde::Serialize;
use std::fmt;

/// One row of the generated table: external symbol and the internal key it
/// stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingPair {
    /// Internal key constant
    pub canonical: CanonicalKey,
    /// Derived or overridden name in the external library
    pub external: String,
}

impl MappingPair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(canonical: CanonicalKey, external: impl Into<String>) -> Self {
        Self {
            canonical,
            external: external.into(),
        }
    }
}

/// Renders the pair as a table-literal row: `{EXTERNAL, CANONICAL},`
impl fmt::Display for MappingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}},", self.external, self.canonical)
    }
}
