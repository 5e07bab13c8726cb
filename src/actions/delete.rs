//! Deletion of quote lines matching search terms

use crate::error::{Result, ValidationError};
use std::fs;
use std::path::Path;

/// Delete every line that contains at least one of the search terms
///
/// A line is kept iff none of the terms occur in it as a case-sensitive
/// substring. The file is rewritten in place with the kept lines only,
/// a full read-then-overwrite with no temp-file swap or backup.
pub fn delete_from_file(path: &Path, terms: &[String]) -> Result<()> {
    if terms.is_empty() {
        return Err(ValidationError::EmptySearchTerms.into());
    }

    let contents = fs::read_to_string(path)?;

    let mut kept = String::new();
    for line in contents.lines() {
        if terms.iter().all(|term| !line.contains(term.as_str())) {
            kept.push_str(line);
            kept.push('\n');
        }
    }

    fs::write(path, kept)?;
    Ok(())
}
