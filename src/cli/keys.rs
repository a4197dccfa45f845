//! Key listing command.

use crate::cli::common::{CliError, CliResult};
use crate::constants::DEFAULT_HEADER_PATH;
use crate::models::CanonicalKey;
use crate::parser::read_header_keys;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List the CACAO key defines found in a header
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Path to the CACAO input header
    #[arg(value_name = "HEADER", default_value = DEFAULT_HEADER_PATH)]
    pub header: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct KeyEntry<'a> {
    name: &'a CanonicalKey,
    base: &'a str,
}

#[derive(Debug, Serialize)]
struct KeysOutput<'a> {
    count: usize,
    keys: Vec<KeyEntry<'a>>,
}

impl KeysArgs {
    /// Execute the keys command
    pub fn execute(&self) -> CliResult<()> {
        let keys = read_header_keys(&self.header)
            .map_err(|e| CliError::io(format!("Failed to load header: {e:#}")))?;

        if self.json {
            let output = KeysOutput {
                count: keys.len(),
                keys: keys
                    .iter()
                    .map(|key| KeyEntry {
                        name: key,
                        base: key.base(),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Found {} CACAO keys.", keys.len());
            for key in &keys {
                println!("  {key}");
            }
        }

        Ok(())
    }
}
