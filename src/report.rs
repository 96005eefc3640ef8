use crate::aggregate::CompletenessResult;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default report name, written to the current working directory.
pub const DEFAULT_REPORT: &str = "isolate_segments_report.txt";

/// Write one block per incomplete isolate, each followed by a blank line.
pub fn write_report<W: Write>(mut w: W, results: &[CompletenessResult]) -> Result<()> {
    for r in results {
        writeln!(w, "Isolate ID: {}", r.isolate_id)?;
        writeln!(w, "Segments present: {}", r.present.join(", "))?;
        if !r.missing.is_empty() {
            writeln!(w, "Missing segments: {}", r.missing.join(", "))?;
        }
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_report_file<P: AsRef<Path>>(path: P, results: &[CompletenessResult]) -> Result<()> {
    let path = path.as_ref();
    let fh = File::create(path)
        .with_context(|| format!("Failed to create report: {}", path.display()))?;
    write_report(BufWriter::new(fh), results)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
