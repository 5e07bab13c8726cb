//! Pure validation helpers run between parsing and dispatch
//!
//! Validation is kept out of the option declarations so the dispatcher can
//! call it explicitly: every check here completes before any action runs,
//! and a failure means no file has been touched.

use crate::actions::style;
use crate::error::{ValidationError, ValidationResult};
use colored::Color;
use std::path::PathBuf;

/// Quotes file used when `--file` is omitted
pub const DEFAULT_FILE: &str = "sampleQuotes.txt";

/// Resolve the `--file` option to a path
///
/// An omitted option falls back to [`DEFAULT_FILE`] with no existence
/// check (the add action creates it on first use). An explicit path must
/// name an existing file.
pub fn resolve_file(explicit: Option<&str>) -> ValidationResult<PathBuf> {
    match explicit {
        None => Ok(PathBuf::from(DEFAULT_FILE)),
        Some(raw) => {
            let path = PathBuf::from(raw);
            if path.is_file() {
                Ok(path)
            } else {
                Err(ValidationError::FileNotFound(path))
            }
        }
    }
}

/// Resolve a `--fgcolor` value against the fixed palette
pub fn parse_fgcolor(name: &str) -> ValidationResult<Color> {
    style::color_from_name(name).ok_or_else(|| ValidationError::UnknownColor(name.to_string()))
}
