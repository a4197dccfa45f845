//! Naming rules for the external library's key symbols.
//!
//! A [`NamingConfig`] is gathered once per run (interactively or from a rules
//! file) and then shared read-only by every mapping operation.

use serde::Deserialize;
use std::fmt;

/// How a key name is capitalized in the external library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Capitalization {
    /// `caps_lock`
    Lower,
    /// `Caps_Lock` (each underscore-delimited part title-cased)
    Capitalized,
    /// `CAPS_LOCK`
    Upper,
    /// Name is passed through untouched. Used for unrecognized mode strings.
    #[default]
    Verbatim,
}

impl Capitalization {
    /// Parses a mode name (`lower`, `capitalized`, `upper`), ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn parse(mode: &str) -> Option<Self> {
        match mode.trim().to_lowercase().as_str() {
            "lower" => Some(Self::Lower),
            "capitalized" => Some(Self::Capitalized),
            "upper" => Some(Self::Upper),
            _ => None,
        }
    }

    /// Parses a mode name, degrading to [`Capitalization::Verbatim`] when the
    /// name is not recognized.
    #[must_use]
    pub fn parse_lenient(mode: &str) -> Self {
        Self::parse(mode).unwrap_or_else(|| {
            tracing::warn!(
                mode,
                "Unrecognized capitalization mode, names will be left unchanged"
            );
            Self::Verbatim
        })
    }

    /// Applies this mode to a whole name.
    ///
    /// # Examples
    ///
    /// ```
    /// use keycvt::models::Capitalization;
    ///
    /// assert_eq!(Capitalization::Capitalized.apply("CAPS_LOCK"), "Caps_Lock");
    /// assert_eq!(Capitalization::Lower.apply("SHIFT"), "shift");
    /// ```
    #[must_use]
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Lower => word.to_lowercase(),
            Self::Upper => word.to_uppercase(),
            Self::Capitalized => word
                .split('_')
                .map(title_case)
                .collect::<Vec<_>>()
                .join("_"),
            Self::Verbatim => word.to_string(),
        }
    }

    /// Applies this mode to a direction letter (`L`/`R`).
    ///
    /// Single letters stay uppercase unless the mode is [`Capitalization::Lower`].
    #[must_use]
    pub fn apply_letter(self, letter: char) -> char {
        match self {
            Self::Lower => letter.to_ascii_lowercase(),
            Self::Capitalized | Self::Upper => letter.to_ascii_uppercase(),
            Self::Verbatim => letter,
        }
    }
}

impl From<String> for Capitalization {
    fn from(mode: String) -> Self {
        Self::parse_lenient(&mode)
    }
}

impl fmt::Display for Capitalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lower => "lower",
            Self::Capitalized => "capitalized",
            Self::Upper => "upper",
            Self::Verbatim => "verbatim",
        };
        f.write_str(name)
    }
}

fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// What the external library calls the Enter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum EnterName {
    /// `ENTER`
    #[default]
    Enter,
    /// `RETURN`
    Return,
}

impl EnterName {
    /// Parses `enter` or `return`; anything else falls back to `Enter`.
    #[must_use]
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "return" => Self::Return,
            _ => Self::Enter,
        }
    }

    /// Uppercase key name in the internal convention.
    #[must_use]
    pub const fn key_name(self) -> &'static str {
        match self {
            Self::Enter => "ENTER",
            Self::Return => "RETURN",
        }
    }
}

impl From<String> for EnterName {
    fn from(answer: String) -> Self {
        Self::parse(&answer)
    }
}

/// One element of a [`DirectionPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// `K` - the key stem (e.g. `SHIFT`)
    KeyName,
    /// `D` - the direction word (`Left`/`Right`)
    DirectionWord,
    /// `d` - the direction letter (`L`/`R`)
    DirectionLetter,
    /// Any other character, copied as-is
    Literal(char),
}

/// Template for left/right modifier names, e.g. `D_K` or `K_d`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub struct DirectionPattern {
    source: String,
    tokens: Vec<PatternToken>,
}

impl DirectionPattern {
    /// Parses a pattern string. Every character is meaningful, so parsing
    /// cannot fail.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let tokens = pattern
            .chars()
            .map(|c| match c {
                'K' => PatternToken::KeyName,
                'D' => PatternToken::DirectionWord,
                'd' => PatternToken::DirectionLetter,
                other => PatternToken::Literal(other),
            })
            .collect();

        Self {
            source: pattern.to_string(),
            tokens,
        }
    }

    /// Parsed tokens in template order.
    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// The pattern as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<String> for DirectionPattern {
    fn from(pattern: String) -> Self {
        Self::parse(&pattern)
    }
}

/// Naming convention of the external library.
///
/// Defaults match an operator who answers every prompt with an empty line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Symbol prefix joined with `_` (e.g. `XKB_KEY`); empty for none
    pub external_prefix: String,
    /// Capitalization of ordinary keys
    pub key_case: Capitalization,
    /// Capitalization of control, keypad and modifier keys
    pub control_case: Capitalization,
    /// Literal keypad prefix (e.g. `KP`); never case-transformed
    pub keypad_prefix: String,
    /// Name used for the Enter key
    pub enter_name: EnterName,
    /// Template for left/right modifier keys
    pub direction_pattern: DirectionPattern,
}
