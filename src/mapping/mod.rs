//! Mapping engine: canonical keys to external symbol names.
//!
//! The engine is a pure function of `(CanonicalKey, NamingConfig, OverrideMap)`.
//! Overrides are consulted first; everything else goes through the ordered
//! [`rules::RULE_CHAIN`] and then receives the external prefix.

pub mod rules;

use crate::models::{CanonicalKey, MappingPair, NamingConfig, OverrideMap};
use rules::{Outcome, RULE_CHAIN};
use serde::Serialize;
use std::collections::HashMap;

/// Applies a [`NamingConfig`] and an [`OverrideMap`] to canonical keys.
#[derive(Debug, Clone, Copy)]
pub struct MappingEngine<'a> {
    config: &'a NamingConfig,
    overrides: &'a OverrideMap,
}

impl<'a> MappingEngine<'a> {
    /// Creates an engine borrowing the run's rules.
    #[must_use]
    pub const fn new(config: &'a NamingConfig, overrides: &'a OverrideMap) -> Self {
        Self { config, overrides }
    }

    /// External name for one key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keycvt::mapping::MappingEngine;
    /// use keycvt::models::{CanonicalKey, Capitalization, NamingConfig, OverrideMap};
    ///
    /// let config = NamingConfig {
    ///     external_prefix: "XKB_KEY".to_string(),
    ///     key_case: Capitalization::Lower,
    ///     ..NamingConfig::default()
    /// };
    /// let overrides = OverrideMap::new();
    /// let engine = MappingEngine::new(&config, &overrides);
    ///
    /// let key = CanonicalKey::new("CACAO_KEY_A").unwrap();
    /// assert_eq!(engine.map_key(&key), "XKB_KEY_a");
    /// ```
    #[must_use]
    pub fn map_key(&self, key: &CanonicalKey) -> String {
        if let Some(external) = self.overrides.get(key.as_str()) {
            return external.to_string();
        }

        let derived = self.derive(key.base());

        if self.config.external_prefix.is_empty() {
            derived
        } else {
            format!("{}_{}", self.config.external_prefix, derived)
        }
    }

    /// Derived name for a base name, before the external prefix is applied.
    #[must_use]
    pub fn derive(&self, base: &str) -> String {
        let mut name = base.to_string();

        for rule in RULE_CHAIN {
            match rule.apply(base, &name, self.config) {
                Outcome::Skip => {}
                Outcome::Rewrite(rewritten) => name = rewritten,
                Outcome::Derived(derived) => return derived,
            }
        }

        name
    }

    /// Maps every key, keeping input order.
    #[must_use]
    pub fn map_keys(&self, keys: &[CanonicalKey]) -> Vec<MappingPair> {
        keys.iter()
            .map(|key| MappingPair::new(key.clone(), self.map_key(key)))
            .collect()
    }
}

/// An external name produced for more than one canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// The shared external name
    pub external: String,
    /// Keys mapped to it, in table order
    pub keys: Vec<CanonicalKey>,
}

/// Groups pairs that share an external name.
///
/// Collisions are returned in the order their name first appears in the table.
#[must_use]
pub fn find_collisions(pairs: &[MappingPair]) -> Vec<Collision> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Collision> = Vec::new();

    for pair in pairs {
        if let Some(&slot) = index.get(pair.external.as_str()) {
            groups[slot].keys.push(pair.canonical.clone());
        } else {
            index.insert(pair.external.as_str(), groups.len());
            groups.push(Collision {
                external: pair.external.clone(),
                keys: vec![pair.canonical.clone()],
            });
        }
    }

    groups.retain(|group| group.keys.len() > 1);
    groups
}
