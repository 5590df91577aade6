use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::{IGNORE_MARKER, MANIFEST_FILE};
use crate::error::ManifestError;

/// The parts of a `package.xml` that feed the effort estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<String>,
    pub build_depends: usize,
    pub exec_depends: usize,
    /// Union of every `build_depend`, `exec_depend` and `depend` entry.
    pub dependencies: BTreeSet<String>,
}

impl Manifest {
    /// Reads and parses the manifest of the package rooted at `package_dir`.
    pub fn load(package_dir: &Path) -> Result<Self, ManifestError> {
        let path = package_dir.join(MANIFEST_FILE);
        let xml =
            fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;
        Self::parse(&xml).map_err(|e| ManifestError::malformed(&path, e.to_string()))
    }

    /// Only direct children of the root element are considered. A `depend`
    /// entry counts toward both the build and the exec totals.
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        let doc = roxmltree::Document::parse(xml)?;
        let mut manifest = Manifest::default();

        for child in doc.root_element().children().filter(|n| n.is_element()) {
            let text = child.text().map(str::trim).unwrap_or_default();
            match child.tag_name().name() {
                "name" => {
                    if manifest.name.is_none() && !text.is_empty() {
                        manifest.name = Some(text.to_string());
                    }
                }
                "build_depend" => {
                    manifest.build_depends += 1;
                    manifest.dependencies.insert(text.to_string());
                }
                "exec_depend" => {
                    manifest.exec_depends += 1;
                    manifest.dependencies.insert(text.to_string());
                }
                "depend" => {
                    manifest.build_depends += 1;
                    manifest.exec_depends += 1;
                    manifest.dependencies.insert(text.to_string());
                }
                _ => {}
            }
        }

        Ok(manifest)
    }

    pub fn unique_dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}

/// True when the package carries the ignore marker.
pub fn is_ignored(package_dir: &Path) -> bool {
    package_dir.join(IGNORE_MARKER).exists()
}
