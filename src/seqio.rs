use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn is_gz(path: &Path) -> bool {
    path.extension().map(|e| e.eq_ignore_ascii_case("gz")).unwrap_or(false)
}

fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>> {
    let f = File::open(path)
        .with_context(|| format!("Failed to open input: {}", path.display()))?;
    if is_gz(path) {
        let gz = MultiGzDecoder::new(f);
        Ok(Box::new(BufReader::new(gz)))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

/// Streams the description line of each FASTA record, skipping sequence lines.
///
/// Yields the text after `>` with surrounding whitespace removed. Anything before
/// the first header is ignored, so an empty file yields nothing.
pub struct FastaHeaders<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> FastaHeaders<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: String::new() }
    }
}

impl<R: BufRead> Iterator for FastaHeaders<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(rest) = self.line.strip_prefix('>') {
                        return Some(Ok(rest.trim().to_string()));
                    }
                }
                Err(e) => return Some(Err(anyhow::Error::new(e).context("Failed to read FASTA input"))),
            }
        }
    }
}

/// Open a FASTA file (optionally gzipped) and stream its record headers.
pub fn read_headers<P: AsRef<Path>>(path: P) -> Result<FastaHeaders<Box<dyn BufRead>>> {
    let rdr = open_maybe_gz(path.as_ref())?;
    Ok(FastaHeaders::new(rdr))
}
