//! Data models for key names, naming rules and generated mappings.
//!
//! This module contains the value types shared by the extractor, the mapping
//! engine and the CLI. Models carry no I/O.

pub mod canonical_key;
pub mod mapping_pair;
pub mod naming;
pub mod overrides;

// Re-export all model types
pub use canonical_key::CanonicalKey;
pub use mapping_pair::MappingPair;
pub use naming::{Capitalization, DirectionPattern, EnterName, NamingConfig, PatternToken};
pub use overrides::{OverrideEntryError, OverrideMap};
