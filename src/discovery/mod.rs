//! Package discovery: find every directory in a source tree that carries a
//! package manifest.

pub mod manifest;

use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::MANIFEST_FILE;
use crate::error::IoError;

pub use manifest::Manifest;

/// Returns the directories under `root` (including `root` itself) that
/// directly contain a manifest, in file-name order.
pub fn discover_packages(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut packages = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IoError::directory_scan_error(root, e))?;
        if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILE {
            continue;
        }

        if let Some(dir) = entry.path().parent() {
            trace!(path = %dir.display(), "found package manifest");
            packages.push(dir.to_path_buf());
        }
    }

    debug!(count = packages.len(), root = %root.display(), "discovered packages");
    Ok(packages)
}
