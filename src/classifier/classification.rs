use std::path::PathBuf;

/// Bucket a counted file falls into for detector assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Native,
    Scripting,
    InterfaceDefinition,
    LaunchDescription,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Native => "native",
            FileKind::Scripting => "scripting",
            FileKind::InterfaceDefinition => "interface-definition",
            FileKind::LaunchDescription => "launch-description",
        }
    }
}

/// A source file with its bucket and code line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub kind: FileKind,
    pub lines: u64,
}

impl ClassifiedFile {
    pub fn new(path: impl Into<PathBuf>, kind: FileKind, lines: u64) -> Self {
        Self {
            path: path.into(),
            kind,
            lines,
        }
    }
}
