mod classification;

pub use classification::{ClassifiedFile, FileKind};

use std::path::Path;

use crate::counter::{FileCount, Language, LineCountReport};

const INTERFACE_EXTENSIONS: &[&str] = &["msg", "srv"];
const LAUNCH_EXTENSION: &str = "launch";

/// Assigns a bucket to a counted file, or `None` when no detector cares
/// about it.
pub fn classify(path: &Path, count: &FileCount) -> Option<FileKind> {
    match count.language {
        Language::C | Language::Cpp => Some(FileKind::Native),
        Language::Python => Some(FileKind::Scripting),
        Language::Unknown => {
            let ext = path.extension().and_then(|e| e.to_str())?;
            if INTERFACE_EXTENSIONS.contains(&ext) {
                Some(FileKind::InterfaceDefinition)
            } else if ext == LAUNCH_EXTENSION {
                Some(FileKind::LaunchDescription)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// The files of one package partitioned by bucket.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedFiles {
    pub native: Vec<ClassifiedFile>,
    pub scripting: Vec<ClassifiedFile>,
    pub launch: Vec<ClassifiedFile>,
    pub interface_definitions: usize,
}

impl ClassifiedFiles {
    pub fn from_report(report: &LineCountReport) -> Self {
        let mut files = Self::default();

        for (path, count) in &report.files {
            let Some(kind) = classify(path, count) else {
                continue;
            };
            let file = ClassifiedFile::new(path.clone(), kind, count.code);
            match kind {
                FileKind::Native => files.native.push(file),
                FileKind::Scripting => files.scripting.push(file),
                FileKind::LaunchDescription => files.launch.push(file),
                FileKind::InterfaceDefinition => files.interface_definitions += 1,
            }
        }

        files
    }

    pub fn native_lines(&self) -> u64 {
        self.native.iter().map(|f| f.lines).sum()
    }

    pub fn scripting_lines(&self) -> u64 {
        self.scripting.iter().map(|f| f.lines).sum()
    }
}
