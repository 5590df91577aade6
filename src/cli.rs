use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::scanner::PackageFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "port-effort")]
#[command(
    about = "Walk a source tree and estimate how much effort it takes to port each package to ROS 2",
    long_about = None
)]
pub struct Args {
    /// The top-level of the source tree in which to find packages
    #[arg(value_name = "SOURCE_PATH")]
    pub source_path: PathBuf,

    /// Only examine the named package (may be passed more than once)
    #[arg(long, value_name = "NAME")]
    pub exclusive: Vec<String>,

    /// Exclude the named package (may be passed more than once)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Report format (csv, json)
    #[arg(short = 'f', long, default_value = "csv")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and the report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_source_path(&self.source_path)
    }

    pub fn package_filter(&self) -> PackageFilter {
        PackageFilter::new(self.exclusive.clone(), self.exclude.clone())
    }
}

pub fn validate_source_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    std::fs::read_dir(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_repeatable_filters() {
        let args = Args::try_parse_from([
            "port-effort",
            "--exclusive",
            "foo",
            "--exclusive",
            "bar",
            "--exclude",
            "baz",
            "/ws/src",
        ])
        .unwrap();

        assert_eq!(args.source_path, PathBuf::from("/ws/src"));
        assert_eq!(args.exclusive, vec!["foo", "bar"]);
        assert_eq!(args.exclude, vec!["baz"]);
        assert_eq!(args.format, OutputFormat::Csv);
    }

    #[test]
    fn test_parse_requires_source_path() {
        assert!(Args::try_parse_from(["port-effort"]).is_err());
    }

    #[test]
    fn test_parse_json_format() {
        let args = Args::try_parse_from(["port-effort", "-f", "json", "."]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_package_filter_from_args() {
        let args =
            Args::try_parse_from(["port-effort", "--exclusive", "foo", "--exclude", "foo", "."])
                .unwrap();
        assert!(!args.package_filter().allows("foo"));
    }

    #[test]
    fn test_validate_source_path_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_source_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_source_path_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.xml");
        fs::write(&file_path, "<package/>").unwrap();

        assert!(validate_source_path(&file_path).is_err());
    }

    #[test]
    fn test_validate_source_path_not_exists() {
        let path = Path::new("/nonexistent/path/that/does/not/exist");
        assert!(validate_source_path(path).is_err());
    }

    #[test]
    fn test_verbose_flag_incremental() {
        let args = Args::try_parse_from(["port-effort", "-vv", "."]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);
    }
}
