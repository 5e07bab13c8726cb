//! Paced read-and-display of the quotes file

use crate::actions::style::LineStyle;
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Read the file and write each line to `out`, styled and paced
///
/// Lines come from a lazy, single-pass iterator over the file. After each
/// line the calling thread blocks for `delay_ms` milliseconds per character
/// in the line, a deliberate display-pacing effect. An unreadable file
/// surfaces as an error with no output written for the failing line.
pub fn read_file<W: Write>(
    path: &Path,
    delay_ms: u64,
    style: &LineStyle,
    out: &mut W,
) -> Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line?;
        writeln!(out, "{}", style.paint(&line))?;
        out.flush()?;

        let pause = delay_ms * line.chars().count() as u64;
        if pause > 0 {
            thread::sleep(Duration::from_millis(pause));
        }
    }

    Ok(())
}
