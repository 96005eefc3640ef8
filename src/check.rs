//! Segment completeness check.
//!
//! Scans FASTA headers (plain or `.gz`), groups segments by isolate and reports
//! every isolate that lacks one or more of the eight influenza segments.
//! Malformed headers and unknown segment labels are logged as warnings and skipped.
//!
//! ### Example
//! ```text
//! segcheck sequences.fasta
//! segcheck sequences.fasta.gz -o missing.txt
//! ```

use crate::aggregate::{CompletenessAggregator, CompletenessResult};
use crate::header::{HeaderClassifier, HeaderError};
use crate::report::{write_report_file, DEFAULT_REPORT};
use crate::seqio::read_headers;
use crate::segments::ExpectedSegments;
use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Input FASTA (optionally gzipped)
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,

    /// Report path
    #[arg(short = 'o', long = "output", value_name = "REPORT", default_value = DEFAULT_REPORT)]
    pub output: PathBuf,
}

/// Counters collected while scanning.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub records: usize,
    pub malformed: usize,
    pub unrecognized: usize,
    pub isolates: usize,
}

/// Classify every header and return the incomplete isolates.
///
/// Bad headers are skipped with a warning; a read error aborts the scan.
pub fn scan<I>(headers: I, expected: ExpectedSegments) -> Result<(Vec<CompletenessResult>, ScanStats)>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut stats = ScanStats::default();
    let mut agg = CompletenessAggregator::new(expected.clone());
    let classifier = HeaderClassifier::new(&expected);

    for header in headers {
        let header = header?;
        stats.records += 1;
        match classifier.classify(&header) {
            Ok(parsed) => agg.record(&parsed.isolate_id, parsed.segment),
            Err(e @ HeaderError::TooFewFields { .. }) => {
                stats.malformed += 1;
                warn!("Unexpected header format ({e}): {header}");
            }
            Err(e @ HeaderError::UnrecognizedSegment { .. }) => {
                stats.unrecognized += 1;
                warn!("Unexpected segment in header ({e}): {header}");
            }
        }
    }
    stats.isolates = agg.isolate_count();
    Ok((agg.finalize(), stats))
}

/// Execute the check and write the report.
pub fn run(args: CheckArgs) -> Result<()> {
    debug!("Scanning {}", args.input.display());
    let headers = read_headers(&args.input)?;
    let (results, stats) = scan(headers, ExpectedSegments::influenza())
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    info!(
        "Scanned {} records ({} malformed, {} unrecognized segment); {} isolates, {} incomplete",
        stats.records,
        stats.malformed,
        stats.unrecognized,
        stats.isolates,
        results.len()
    );

    write_report_file(&args.output, &results)?;
    println!("Results written to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::INFLUENZA_SEGMENTS;
    use anyhow::anyhow;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn ok_headers(hs: &[&str]) -> Vec<Result<String>> {
        hs.iter().map(|h| Ok(h.to_string())).collect()
    }

    #[test]
    fn skips_bad_headers() {
        let (results, stats) = scan(
            ok_headers(&["A|iso3|x|x|XX|x", "A|iso4", "A|iso5|x|x|HA|x"]),
            ExpectedSegments::influenza(),
        )
        .unwrap();
        assert_eq!(
            stats,
            ScanStats { records: 3, malformed: 1, unrecognized: 1, isolates: 1 }
        );
        let ids: Vec<_> = results.iter().map(|r| r.isolate_id.as_str()).collect();
        assert_eq!(ids, vec!["iso5"]);
    }

    #[test]
    fn duplicate_records_do_not_change_results() {
        let once = scan(ok_headers(&["A|i|x|x|HA|x"]), ExpectedSegments::influenza()).unwrap().0;
        let twice = scan(ok_headers(&["A|i|x|x|HA|x", "A|i|x|x|HA|x"]), ExpectedSegments::influenza())
            .unwrap()
            .0;
        assert_eq!(once, twice);
    }

    #[test]
    fn read_error_aborts_scan() {
        let headers = vec![Ok("A|i|x|x|HA|x".to_string()), Err(anyhow!("disk gone"))];
        assert!(scan(headers, ExpectedSegments::influenza()).is_err());
    }

    #[test]
    fn run_writes_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.fa");
        let output = dir.path().join("report.txt");

        let mut f = File::create(&input).unwrap();
        for seg in INFLUENZA_SEGMENTS {
            writeln!(f, ">A|iso1|x|x|{seg}|x").unwrap();
            writeln!(f, "ACGT").unwrap();
        }
        writeln!(f, ">A|iso2|x|x|HA|x\nACGT\n>A|iso2|x|x|NA|x\nACGT").unwrap();

        run(CheckArgs { input, output: output.clone() }).unwrap();
        let text = fs::read_to_string(output).unwrap();
        assert_eq!(
            text,
            "Isolate ID: iso2\nSegments present: HA, NA\nMissing segments: PB2, PB1, PA, NP, MP, NS\n\n"
        );
    }

    #[test]
    fn unreadable_input_leaves_no_report() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("report.txt");
        let res = run(CheckArgs { input: dir.path().join("missing.fa"), output: output.clone() });
        assert!(res.is_err());
        assert!(!output.exists());
    }
}
