//! Per-file porting heuristics.
//!
//! A detector watches the lines of a single file and, once the file has been
//! read, turns what it saw into an effort penalty. Detectors carry evidence
//! about one file only, so a fresh set is built for every file.

mod launch;
mod native;
pub mod patterns;
mod scripting;

pub use launch::EmbeddedTestDirective;
pub use native::{
    ActionServerUsage, DynamicReconfigureUsage, LegacyNamespaceUsage, TransformUsage,
};
pub use scripting::{LegacyImportUsage, ScriptActionServerUsage, ScriptTransformUsage};

use crate::classifier::{ClassifiedFile, FileKind};

pub trait LineDetector {
    /// Inspects the next line of the file, in file order.
    fn observe(&mut self, line: &[u8]);

    /// Consumes the detector and returns its penalty for `file`.
    fn finalize(self, file: &ClassifiedFile) -> u64;
}

#[derive(Debug)]
pub enum Detector {
    LegacyNamespace(LegacyNamespaceUsage),
    Transform(TransformUsage),
    DynamicReconfigure(DynamicReconfigureUsage),
    ActionServer(ActionServerUsage),
    LegacyImport(LegacyImportUsage),
    ScriptTransform(ScriptTransformUsage),
    ScriptActionServer(ScriptActionServerUsage),
    LaunchTest(EmbeddedTestDirective),
}

impl Detector {
    /// The detectors that apply to files of `kind`, in evaluation order.
    /// Interface definitions are counted but never scanned.
    pub fn fresh_set(kind: FileKind) -> Vec<Detector> {
        match kind {
            FileKind::Native => vec![
                Detector::LegacyNamespace(LegacyNamespaceUsage::default()),
                Detector::Transform(TransformUsage::default()),
                Detector::DynamicReconfigure(DynamicReconfigureUsage::default()),
                Detector::ActionServer(ActionServerUsage::default()),
            ],
            FileKind::Scripting => vec![
                Detector::LegacyImport(LegacyImportUsage::default()),
                Detector::ScriptTransform(ScriptTransformUsage::default()),
                Detector::ScriptActionServer(ScriptActionServerUsage::default()),
            ],
            FileKind::LaunchDescription => {
                vec![Detector::LaunchTest(EmbeddedTestDirective::default())]
            }
            FileKind::InterfaceDefinition => Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Detector::LegacyNamespace(_) => "legacy-namespace",
            Detector::Transform(_) => "transform",
            Detector::DynamicReconfigure(_) => "dynamic-reconfigure",
            Detector::ActionServer(_) => "action-server",
            Detector::LegacyImport(_) => "legacy-import",
            Detector::ScriptTransform(_) => "script-transform",
            Detector::ScriptActionServer(_) => "script-action-server",
            Detector::LaunchTest(_) => "launch-test",
        }
    }
}

impl LineDetector for Detector {
    fn observe(&mut self, line: &[u8]) {
        match self {
            Detector::LegacyNamespace(d) => d.observe(line),
            Detector::Transform(d) => d.observe(line),
            Detector::DynamicReconfigure(d) => d.observe(line),
            Detector::ActionServer(d) => d.observe(line),
            Detector::LegacyImport(d) => d.observe(line),
            Detector::ScriptTransform(d) => d.observe(line),
            Detector::ScriptActionServer(d) => d.observe(line),
            Detector::LaunchTest(d) => d.observe(line),
        }
    }

    fn finalize(self, file: &ClassifiedFile) -> u64 {
        match self {
            Detector::LegacyNamespace(d) => d.finalize(file),
            Detector::Transform(d) => d.finalize(file),
            Detector::DynamicReconfigure(d) => d.finalize(file),
            Detector::ActionServer(d) => d.finalize(file),
            Detector::LegacyImport(d) => d.finalize(file),
            Detector::ScriptTransform(d) => d.finalize(file),
            Detector::ScriptActionServer(d) => d.finalize(file),
            Detector::LaunchTest(d) => d.finalize(file),
        }
    }
}
