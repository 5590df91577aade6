use std::path::Path;

/// Comment markers used to tell code lines from comment-only lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub line: &'static [&'static str],
    pub block: Option<(&'static str, &'static str)>,
    /// Quote characters opening a literal in which comment markers are text.
    pub quotes: &'static [u8],
}

const C_FAMILY: CommentSyntax = CommentSyntax {
    line: &["//"],
    block: Some(("/*", "*/")),
    quotes: b"\"'",
};

const HASH: CommentSyntax = CommentSyntax {
    line: &["#"],
    block: None,
    quotes: b"\"'",
};

const MARKUP: CommentSyntax = CommentSyntax {
    line: &[],
    block: Some(("<!--", "-->")),
    quotes: &[],
};

const NONE: CommentSyntax = CommentSyntax {
    line: &[],
    block: None,
    quotes: &[],
};

/// Language assigned to a file by the line counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cpp,
    Python,
    Cmake,
    Xml,
    Yaml,
    Shell,
    Markdown,
    /// Extension not recognized.
    Unknown,
    /// Zero-byte file.
    Empty,
    /// File that looks like binary data.
    Binary,
}

impl Language {
    /// Detects the language from the file name alone.
    pub fn from_path(path: &Path) -> Self {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Self::Unknown;
        };

        if file_name == "CMakeLists.txt" {
            return Self::Cmake;
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Unknown;
        };

        match ext {
            "c" => Self::C,
            "cc" | "cpp" | "cxx" | "c++" | "cp" | "h" | "hh" | "hpp" | "hxx" | "h++" | "tpp"
            | "ipp" | "C" | "H" | "CPP" => Self::Cpp,
            "py" | "pyw" | "pyi" => Self::Python,
            "cmake" => Self::Cmake,
            "xml" | "xsd" | "xsl" | "urdf" | "xacro" | "sdf" => Self::Xml,
            "yaml" | "yml" => Self::Yaml,
            "sh" | "bash" => Self::Shell,
            "md" | "markdown" => Self::Markdown,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Python => "Python",
            Self::Cmake => "CMake",
            Self::Xml => "XML",
            Self::Yaml => "YAML",
            Self::Shell => "Bash",
            Self::Markdown => "Markdown",
            Self::Unknown => "__unknown__",
            Self::Empty => "__empty__",
            Self::Binary => "__binary__",
        }
    }

    /// `None` for the pseudo-languages, whose files count no code lines.
    pub fn comment_syntax(&self) -> Option<CommentSyntax> {
        match self {
            Self::C | Self::Cpp => Some(C_FAMILY),
            Self::Python | Self::Cmake | Self::Yaml | Self::Shell => Some(HASH),
            Self::Xml => Some(MARKUP),
            Self::Markdown => Some(NONE),
            Self::Unknown | Self::Empty | Self::Binary => None,
        }
    }
}
