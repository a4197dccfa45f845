//! CACAO key conversion library
//!
//! This library extracts the `CACAO_KEY_*` defines from the engine's input
//! header and derives, for each of them, the matching symbol name in an
//! external input library's naming convention.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod mapping;
pub mod models;
pub mod parser;
pub mod wizard;
