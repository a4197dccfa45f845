//! CLI command handlers for keycvt.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning a
//! [`CliResult`]; `main.rs` turns errors into process exit codes.

pub mod common;
pub mod generate;
pub mod keys;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use generate::GenerateArgs;
pub use keys::KeysArgs;
