//! Per-package scan: manifest, file classification, detector passes and
//! score aggregation.

mod filter;
mod score;

use std::path::Path;
use tracing::{debug, info, trace, warn};

use crate::classifier::{ClassifiedFile, ClassifiedFiles};
use crate::counter::{count_directory, for_each_line};
use crate::detector::{Detector, LineDetector};
use crate::discovery::{discover_packages, manifest, Manifest};
use crate::error::{IoError, Result};
use crate::output::PackageRecord;

pub use filter::PackageFilter;
pub use score::{dependency_penalty, mixed_language_penalty, ScoreBreakdown, SizeBucket};

#[derive(Debug, Clone, Default)]
pub struct PackageScanner {
    filter: PackageFilter,
}

impl PackageScanner {
    pub fn new(filter: PackageFilter) -> Self {
        Self { filter }
    }

    /// Scans every package under `root`. Records come back in discovery
    /// order; the report sorts them.
    pub fn scan(&self, root: &Path) -> Result<Vec<PackageRecord>> {
        let mut records = Vec::new();

        for package_dir in discover_packages(root)? {
            if let Some(record) = self.scan_package(&package_dir)? {
                records.push(record);
            }
        }

        info!(packages = records.len(), "scan complete");
        Ok(records)
    }

    /// Returns `None` when the package has no name or is filtered out.
    pub fn scan_package(&self, package_dir: &Path) -> Result<Option<PackageRecord>> {
        let manifest = Manifest::load(package_dir)?;

        let Some(name) = manifest.name.clone() else {
            warn!(
                "Could not find package name in directory '{}', skipping",
                package_dir.display()
            );
            return Ok(None);
        };

        if !self.filter.allows(&name) {
            debug!(package = %name, "filtered out");
            return Ok(None);
        }

        let ignored = manifest::is_ignored(package_dir);
        let report = count_directory(package_dir)?;
        let files = ClassifiedFiles::from_report(&report);

        let breakdown = ScoreBreakdown {
            native: score_files(&files.native)?,
            scripting: score_files(&files.scripting)?,
            mixed_language: mixed_language_penalty(files.native.len(), files.scripting.len()),
            launch: score_files(&files.launch)?,
            dependencies: dependency_penalty(manifest.unique_dependency_count()),
        };
        let score = breakdown.total();
        let size = SizeBucket::classify(ignored, score);

        info!(
            package = %name,
            score,
            size = size.as_str(),
            ignored,
            "scored package"
        );

        Ok(Some(PackageRecord {
            name,
            build_depends: manifest.build_depends,
            exec_depends: manifest.exec_depends,
            native_files: files.native.len(),
            native_lines: files.native_lines(),
            scripting_files: files.scripting.len(),
            scripting_lines: files.scripting_lines(),
            interface_files: files.interface_definitions,
            size,
            score,
            breakdown,
        }))
    }
}

/// Runs a fresh detector set over `file` in a single pass. Every detector
/// sees a line before any detector sees the next one.
pub fn scan_file(file: &ClassifiedFile) -> std::result::Result<u64, IoError> {
    let mut detectors = Detector::fresh_set(file.kind);
    if detectors.is_empty() {
        return Ok(0);
    }

    trace!(path = %file.path.display(), kind = file.kind.as_str(), "scanning file");
    for_each_line(&file.path, |line| {
        for detector in detectors.iter_mut() {
            detector.observe(line);
        }
    })?;

    let mut total = 0;
    for detector in detectors {
        let name = detector.name();
        let penalty = detector.finalize(file);
        if penalty > 0 {
            debug!(path = %file.path.display(), detector = name, penalty, "penalty");
        }
        total += penalty;
    }

    Ok(total)
}

fn score_files(files: &[ClassifiedFile]) -> std::result::Result<u64, IoError> {
    files.iter().map(scan_file).sum()
}
