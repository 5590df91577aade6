use serde::Serialize;

use crate::scanner::{ScoreBreakdown, SizeBucket};

/// One row of the porting report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub name: String,
    pub build_depends: usize,
    pub exec_depends: usize,
    pub native_files: usize,
    pub native_lines: u64,
    pub scripting_files: usize,
    pub scripting_lines: u64,
    pub interface_files: usize,
    pub size: SizeBucket,
    pub score: u64,
    pub breakdown: ScoreBreakdown,
}

impl PackageRecord {
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.name,
            self.build_depends,
            self.exec_depends,
            self.native_files,
            self.native_lines,
            self.scripting_files,
            self.scripting_lines,
            self.interface_files,
            self.size.as_str()
        )
    }
}

#[cfg(test)]
pub(crate) fn sample_record(name: &str) -> PackageRecord {
    PackageRecord {
        name: name.to_string(),
        build_depends: 1,
        exec_depends: 1,
        native_files: 1,
        native_lines: 500,
        scripting_files: 0,
        scripting_lines: 0,
        interface_files: 0,
        size: SizeBucket::Small,
        score: 2,
        breakdown: ScoreBreakdown {
            native: 1,
            dependencies: 1,
            ..ScoreBreakdown::default()
        },
    }
}
