//! segcheck: influenza segment completeness checker
//!
//! Reads a FASTA file whose headers carry an isolate ID and a segment label,
//! and writes a report of isolates missing any of the eight genome segments.

mod aggregate;
mod check;
mod header;
mod report;
mod segments;
mod seqio;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

/// segcheck CLI
#[derive(Parser, Debug)]
#[command(name = "segcheck")]
#[command(author, version, about = "Report influenza isolates with missing genome segments", long_about = None)]
struct Cli {
    #[command(flatten)]
    check: check::CheckArgs,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // usage errors exit with 1, not clap's default 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    check::run(cli.check)
}
