//! Priority-ordered derivation rules.
//!
//! Each [`Rule`] inspects the key's base name and either leaves it to the next
//! rule, rewrites the working name and continues, or produces the final
//! derived name. [`RULE_CHAIN`] fixes the order; new special cases are added
//! by inserting a variant at the right position.

use crate::models::{NamingConfig, PatternToken};

/// Control keys that use the control-key capitalization, spelled the way the
/// internal header spells them.
pub const CONTROL_KEYS: &[&str] = &[
    "ENTER",
    "RETURN",
    "ESCAPE",
    "BACKSPACE",
    "TAB",
    "CAPS_LOCK",
    "PRINT_SCREEN",
    "SCROLL_LOCK",
    "NUM_LOCK",
    "PAUSE",
    "INSERT",
    "DELETE",
    "HOME",
    "END",
    "PAGE_UP",
    "PAGE_DOWN",
    "RIGHT",
    "LEFT",
    "UP",
    "DOWN",
];

const KEYPAD_SEGMENT: &str = "KP_";

/// A single step of the derivation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `ENTER` becomes `ENTER` or `RETURN`; derivation continues
    EnterAlias,
    /// `F1`..`F25` pass through unchanged
    FunctionKey,
    /// `A`..`Z` use the ordinary-key capitalization
    SingleLetter,
    /// `LEFT_*` / `RIGHT_*` rendered through the direction pattern
    Directional,
    /// `KP_*` with the literal keypad prefix
    Keypad,
    /// Members of [`CONTROL_KEYS`]
    NamedControl,
    /// Everything else
    Default,
}

/// Derivation order. [`Rule::Default`] always matches, so the chain always
/// produces a name.
pub const RULE_CHAIN: &[Rule] = &[
    Rule::EnterAlias,
    Rule::FunctionKey,
    Rule::SingleLetter,
    Rule::Directional,
    Rule::Keypad,
    Rule::NamedControl,
    Rule::Default,
];

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rule does not apply to this key
    Skip,
    /// Replace the working name and continue with the next rule
    Rewrite(String),
    /// Final derived name (before the external prefix)
    Derived(String),
}

/// Which side a directional modifier sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `LEFT_*`
    Left,
    /// `RIGHT_*`
    Right,
}

impl Direction {
    const fn segment(self) -> &'static str {
        match self {
            Self::Left => "LEFT_",
            Self::Right => "RIGHT_",
        }
    }

    const fn word(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }

    const fn letter(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

/// Finds the first `LEFT_`/`RIGHT_` segment and returns the direction with
/// the remaining key stem (segment removed).
///
/// # Examples
///
/// ```
/// use keycvt::mapping::rules::{split_direction, Direction};
///
/// assert_eq!(
///     split_direction("LEFT_SHIFT"),
///     Some((Direction::Left, "SHIFT".to_string()))
/// );
/// assert_eq!(split_direction("LEFT"), None);
/// ```
#[must_use]
pub fn split_direction(base: &str) -> Option<(Direction, String)> {
    [Direction::Left, Direction::Right]
        .into_iter()
        .filter_map(|direction| {
            base.find(direction.segment())
                .map(|index| (index, direction))
        })
        .min_by_key(|(index, _)| *index)
        .map(|(index, direction)| {
            let rest = &base[index + direction.segment().len()..];
            (direction, format!("{}{}", &base[..index], rest))
        })
}

fn is_function_key(base: &str) -> bool {
    base.strip_prefix('F')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

fn is_single_letter(base: &str) -> bool {
    let mut chars = base.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

fn render_direction(config: &NamingConfig, stem: &str, direction: Direction) -> String {
    let case = config.control_case;
    let mut out = String::new();

    for token in config.direction_pattern.tokens() {
        match *token {
            PatternToken::KeyName => out.push_str(&case.apply(stem)),
            PatternToken::DirectionWord => out.push_str(&case.apply(direction.word())),
            PatternToken::DirectionLetter => out.push(case.apply_letter(direction.letter())),
            PatternToken::Literal(c) => out.push(c),
        }
    }

    out
}

impl Rule {
    /// Applies this rule.
    ///
    /// `base` is the key name without the `CACAO_KEY_` prefix and decides
    /// whether the rule matches; `name` is the working name, which differs
    /// from `base` only after [`Rule::EnterAlias`] rewrote it.
    #[must_use]
    pub fn apply(self, base: &str, name: &str, config: &NamingConfig) -> Outcome {
        match self {
            Self::EnterAlias => {
                if base == "ENTER" {
                    Outcome::Rewrite(config.enter_name.key_name().to_string())
                } else {
                    Outcome::Skip
                }
            }
            Self::FunctionKey => {
                if is_function_key(base) {
                    Outcome::Derived(base.to_string())
                } else {
                    Outcome::Skip
                }
            }
            Self::SingleLetter => {
                if is_single_letter(base) {
                    Outcome::Derived(config.key_case.apply(base))
                } else {
                    Outcome::Skip
                }
            }
            Self::Directional => match split_direction(base) {
                Some((direction, stem)) => {
                    Outcome::Derived(render_direction(config, &stem, direction))
                }
                None => Outcome::Skip,
            },
            Self::Keypad => match base.strip_prefix(KEYPAD_SEGMENT) {
                Some(rest) => {
                    let suffix = config.control_case.apply(rest);
                    if config.keypad_prefix.is_empty() {
                        Outcome::Derived(suffix)
                    } else {
                        Outcome::Derived(format!("{}_{}", config.keypad_prefix, suffix))
                    }
                }
                None => Outcome::Skip,
            },
            Self::NamedControl => {
                if CONTROL_KEYS.contains(&base) {
                    Outcome::Derived(config.control_case.apply(name))
                } else {
                    Outcome::Skip
                }
            }
            Self::Default => Outcome::Derived(config.key_case.apply(name)),
        }
    }
}
