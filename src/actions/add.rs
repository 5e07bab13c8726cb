//! Appending a quote/byline entry to the file

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append a quote entry to the file, creating the file if absent
///
/// The entry format is two line breaks, the quote, two line breaks, then
/// the byline prefixed with a dash. Existing content is never rewritten.
/// The write handle is scoped to this function and flushed before return.
pub fn add_to_file(path: &Path, quote: &str, byline: &str) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "\n\n{}", quote)?;
    writeln!(writer, "\n-{}", byline)?;
    writer.flush()?;

    Ok(())
}
