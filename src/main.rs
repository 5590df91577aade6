use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use port_effort::cli;
use port_effort::logging::{self, Verbosity};
use port_effort::{PackageScanner, ReportFormatter};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let scanner = PackageScanner::new(args.package_filter());
    let records = scanner
        .scan(&args.source_path)
        .with_context(|| format!("Failed to scan {}", args.source_path.display()))?;

    let report = ReportFormatter::format(&records, args.format)?;
    print!("{report}");

    Ok(())
}
