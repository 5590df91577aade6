use serde::Serialize;

use crate::config::{
    DEPENDENCIES_PER_POINT, LARGE_THRESHOLD, MEDIUM_THRESHOLD, MIXED_LANGUAGE_PENALTY,
};

/// Rough porting effort class of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeBucket {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl SizeBucket {
    /// Ignored packages are always small.
    pub fn classify(ignored: bool, score: u64) -> Self {
        if ignored || score < MEDIUM_THRESHOLD {
            SizeBucket::Small
        } else if score < LARGE_THRESHOLD {
            SizeBucket::Medium
        } else {
            SizeBucket::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBucket::Small => "S",
            SizeBucket::Medium => "M",
            SizeBucket::Large => "L",
        }
    }
}

/// Where a package's score came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub native: u64,
    pub scripting: u64,
    pub mixed_language: u64,
    pub launch: u64,
    pub dependencies: u64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u64 {
        self.native + self.scripting + self.mixed_language + self.launch + self.dependencies
    }
}

pub fn dependency_penalty(unique_dependencies: usize) -> u64 {
    (unique_dependencies as u64).div_ceil(DEPENDENCIES_PER_POINT)
}

pub fn mixed_language_penalty(native_files: usize, scripting_files: usize) -> u64 {
    if native_files > 0 && scripting_files > 0 {
        MIXED_LANGUAGE_PENALTY
    } else {
        0
    }
}
