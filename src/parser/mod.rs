//! Parsing of the internal input header.
//!
//! This module reads the CACAO input header and extracts the key defines the
//! mapping engine works on.

pub mod header;

// Re-export commonly used functions
pub use header::{extract_keys, read_header_keys, KeyExtractor};
