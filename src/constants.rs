//! Application-wide constants.
//!
//! This module defines the names, header conventions and fixed text shared
//! between the extractor, the mapping engine and the CLI.

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "keycvt";

/// Prefix every internal key define carries (e.g. `CACAO_KEY_SPACE`).
pub const DEFINE_PREFIX: &str = "CACAO_KEY_";

/// Line pattern for key defines in the internal input header.
pub const HEADER_KEY_PATTERN: &str = r"^\s*#define\s+(CACAO_KEY_[A-Z0-9_]+)";

/// Header scanned when no path is given, relative to the repository root.
pub const DEFAULT_HEADER_PATH: &str = "engine/include/Cacao/Input.hpp";

/// Printed before every generated table.
pub const DISCLAIMER: &str = "WARNING: This tool is not perfect and is intended to be used only as a starting point. Please check the generated output and fix it before committing.";
