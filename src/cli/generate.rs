//! Mapping table generation command.

use crate::cli::common::{CliError, CliResult};
use crate::config::RulesFile;
use crate::constants::{DEFAULT_HEADER_PATH, DISCLAIMER};
use crate::mapping::{find_collisions, Collision, MappingEngine};
use crate::models::{CanonicalKey, MappingPair, OverrideMap};
use crate::parser::read_header_keys;
use crate::wizard::{Rules, RulesWizard};
use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Generate the external-name mapping table for every CACAO key
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the CACAO input header
    #[arg(value_name = "HEADER", default_value = DEFAULT_HEADER_PATH)]
    pub header: PathBuf,

    /// Read naming rules from a TOML file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Report external names shared by more than one key
    #[arg(long)]
    pub check_collisions: bool,
}

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    key_count: usize,
    pairs: &'a [MappingPair],
    #[serde(skip_serializing_if = "Option::is_none")]
    collisions: Option<Vec<Collision>>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let keys = read_header_keys(&self.header)
            .map_err(|e| CliError::io(format!("Failed to load header: {e:#}")))?;

        // Keep stdout clean for the JSON document
        if self.json {
            eprintln!("{DISCLAIMER}");
            eprintln!("Found {} CACAO keys.", keys.len());
        } else {
            println!("{DISCLAIMER}");
            println!("Found {} CACAO keys.", keys.len());
        }

        let rules = match &self.rules {
            Some(path) => load_rules_file(path)?,
            None if self.json => prompt_rules(io::stderr().lock())?,
            None => prompt_rules(io::stdout().lock())?,
        };

        warn_unknown_overrides(&keys, &rules.overrides);

        let engine = MappingEngine::new(&rules.naming, &rules.overrides);
        let pairs = engine.map_keys(&keys);
        let collisions = self.check_collisions.then(|| find_collisions(&pairs));

        if self.json {
            let output = GenerateOutput {
                key_count: keys.len(),
                pairs: &pairs,
                collisions,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("\n=== Generated Pairs ===\n");
        for pair in &pairs {
            println!("{pair}");
        }

        if let Some(collisions) = collisions {
            report_collisions(&collisions);
        }

        Ok(())
    }
}

fn load_rules_file(path: &Path) -> CliResult<Rules> {
    let file = RulesFile::load(path).map_err(|e| {
        if e.downcast_ref::<io::Error>().is_some() {
            CliError::io(format!("{e:#}"))
        } else {
            CliError::validation(format!("{e:#}"))
        }
    })?;

    tracing::debug!(path = %path.display(), overrides = file.overrides.len(), "Loaded rules file");
    Ok(file.into())
}

fn prompt_rules<W: Write>(output: W) -> CliResult<Rules> {
    let stdin = io::stdin();
    RulesWizard::new(stdin.lock(), output)
        .run()
        .map_err(|e| CliError::io(format!("Failed to read naming rules: {e:#}")))
}

/// Overrides for keys the header does not define never reach the table.
fn warn_unknown_overrides(keys: &[CanonicalKey], overrides: &OverrideMap) {
    let known: HashSet<&str> = keys.iter().map(CanonicalKey::as_str).collect();
    for key in overrides.keys().filter(|key| !known.contains(key)) {
        tracing::warn!(key, "Override names a key that is not defined in the header");
    }
}

fn report_collisions(collisions: &[Collision]) {
    if collisions.is_empty() {
        eprintln!("No external name collisions.");
        return;
    }

    eprintln!("\n{} external name collision(s):", collisions.len());
    for collision in collisions {
        let keys: Vec<&str> = collision.keys.iter().map(CanonicalKey::as_str).collect();
        eprintln!("  {} <- {}", collision.external, keys.join(", "));
    }
}
