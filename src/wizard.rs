//! Interactive line-based wizard that gathers the naming rules.
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so the
//! CLI can drive it from stdin and tests from an in-memory buffer.

use crate::models::{
    Capitalization, DirectionPattern, EnterName, NamingConfig, OverrideMap,
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Answers collected by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rules {
    /// Naming convention of the external library
    pub naming: NamingConfig,
    /// Per-key replacements
    pub overrides: OverrideMap,
}

/// Prompt session over an input and an output stream.
pub struct RulesWizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> RulesWizard<R, W> {
    /// Creates a wizard reading answers from `input` and writing prompts to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs every prompt in order and returns the gathered rules.
    ///
    /// End of input counts as an empty answer and ends the override list.
    pub fn run(&mut self) -> Result<Rules> {
        writeln!(self.output, "\n=== External Library Naming Rules ===")?;

        let external_prefix =
            self.ask("External key prefix (e.g. KEY, XKB_KEY, ImGuiKey): ")?;

        writeln!(self.output, "\nCapitalization options: lower, capitalized, upper")?;
        let key_case = Capitalization::parse_lenient(&self.ask("How are key names capitalized? ")?);
        let control_case = Capitalization::parse_lenient(
            &self.ask("How are control key names capitalized? ")?,
        );

        let keypad_prefix =
            self.ask("Keypad prefix (literal, e.g. KP, Kp, KPAD; empty if none): ")?;

        let enter_name =
            EnterName::parse(&self.ask("Is the Enter key called 'enter' or 'return'? ")?);

        writeln!(
            self.output,
            "\nModifier direction pattern.\n\
             Use K=key, D=direction word, d=direction letter.\n\
             Examples: D_K, DK, K_D, K_d\n"
        )?;
        let direction_pattern = DirectionPattern::parse(&self.ask("Pattern: ")?);

        let overrides = self.ask_overrides()?;

        Ok(Rules {
            naming: NamingConfig {
                external_prefix,
                key_case,
                control_case,
                keypad_prefix,
                enter_name,
                direction_pattern,
            },
            overrides,
        })
    }

    /// Collects `CACAO_KEY_NAME external_name` lines until an empty line.
    ///
    /// Malformed lines are reported and asked for again.
    fn ask_overrides(&mut self) -> Result<OverrideMap> {
        writeln!(
            self.output,
            "\nEnter per-key rename overrides.\n\
             Format: CACAO_KEY_NAME external_name\n\
             Enter an empty line when finished.\n"
        )?;

        let mut overrides = OverrideMap::new();
        loop {
            let line = self.ask("> ")?;
            if line.is_empty() {
                break;
            }

            match OverrideMap::parse_entry(&line) {
                Ok((key, external)) => overrides.insert(key, external),
                Err(e) => {
                    tracing::debug!(line = %line, "Rejected override entry");
                    writeln!(self.output, "{e}")?;
                }
            }
        }

        Ok(overrides)
    }

    /// Writes a prompt and reads one trimmed answer. Returns an empty string at
    /// end of input.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read answer")?;

        Ok(line.trim().to_string())
    }
}
