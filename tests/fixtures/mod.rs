use std::fs;
use std::path::{Path, PathBuf};

/// Builds a package directory with a manifest under `root`.
pub struct PackageBuilder {
    dir: PathBuf,
}

impl PackageBuilder {
    pub fn new(root: &Path, relative: &str, manifest_body: &str) -> Self {
        let dir = root.join(relative);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("package.xml"),
            format!("<?xml version=\"1.0\"?>\n<package format=\"2\">\n{manifest_body}\n</package>\n"),
        )
        .unwrap();
        Self { dir }
    }

    pub fn file(self, relative: &str, content: &str) -> Self {
        let path = self.dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    #[allow(dead_code)]
    pub fn ignored(self) -> Self {
        fs::write(self.dir.join("CATKIN_IGNORE"), "").unwrap();
        self
    }
}

/// `first_line` followed by filler, `total` code lines overall.
#[allow(dead_code)]
pub fn source_with_lines(first_line: &str, total: usize) -> String {
    let mut source = String::from(first_line);
    source.push('\n');
    for i in 1..total {
        source.push_str(&format!("int value_{i} = {i};\n"));
    }
    source
}

#[allow(dead_code)]
pub fn script_with_lines(first_lines: &[&str], total: usize) -> String {
    let mut source = first_lines.join("\n");
    source.push('\n');
    for i in first_lines.len()..total {
        source.push_str(&format!("value_{i} = {i}\n"));
    }
    source
}
