//! In-process source line counting.
//!
//! Walks a package directory, assigns each file a [`Language`] and counts its
//! code lines. Also provides the raw line stream the detectors consume.

pub mod language;
pub mod sloc;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

use crate::error::IoError;

pub use language::{CommentSyntax, Language};
pub use sloc::count_code_lines;

const BINARY_SNIFF_LEN: usize = 8192;

const SKIPPED_DIRS: &[&str] = &["__pycache__", "_svn"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCount {
    pub language: Language,
    pub code: u64,
}

/// Per-file language and code line count for one directory tree.
#[derive(Debug, Clone, Default)]
pub struct LineCountReport {
    pub files: BTreeMap<PathBuf, FileCount>,
}

/// Counts every file below `dir`, skipping hidden entries, bytecode caches
/// and editor backups.
pub fn count_directory(dir: &Path) -> Result<LineCountReport, IoError> {
    let mut report = LineCountReport::default();

    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
    {
        let entry = entry.map_err(|e| IoError::directory_scan_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let count = count_file(entry.path())?;
        trace!(
            path = %entry.path().display(),
            language = count.language.label(),
            code = count.code,
            "counted file"
        );
        report.files.insert(entry.into_path(), count);
    }

    Ok(report)
}

pub fn count_file(path: &Path) -> Result<FileCount, IoError> {
    let content = fs::read(path).map_err(|e| IoError::read_error(path, e))?;

    let language = if content.is_empty() {
        Language::Empty
    } else if content.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0) {
        Language::Binary
    } else {
        Language::from_path(path)
    };

    let code = language
        .comment_syntax()
        .map_or(0, |syntax| count_code_lines(&content, &syntax));

    Ok(FileCount { language, code })
}

/// Feeds every line of `path` to `f` in file order, without the trailing
/// newline. The file is closed when this returns, on success or error.
pub fn for_each_line<F>(path: &Path, mut f: F) -> Result<(), IoError>
where
    F: FnMut(&[u8]),
{
    let file = File::open(path).map_err(|e| IoError::read_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| IoError::read_error(path, e))?;
        if read == 0 {
            return Ok(());
        }

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        f(line);
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') || name.ends_with('~') {
        return true;
    }
    entry.file_type().is_dir() && SKIPPED_DIRS.contains(&name.as_ref())
}
