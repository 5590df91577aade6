//! Detectors for Python sources.

use super::patterns::{PY_ACTION_SERVER, PY_TF_CONVERSIONS_IMPORT, PY_TF_IMPORT, ROSPY};
use super::LineDetector;
use crate::classifier::ClassifiedFile;
use crate::config::{ACTION_SERVER_PENALTY, SCRIPTING_LINES_PER_POINT, TRANSFORM_PORT_PENALTY};

/// Flags files that use `rospy`. Weighted twice as heavily per line as
/// native files since they also need a Python 3 migration.
#[derive(Debug, Default)]
pub struct LegacyImportUsage {
    uses_rospy: bool,
}

impl LineDetector for LegacyImportUsage {
    fn observe(&mut self, line: &[u8]) {
        if !self.uses_rospy {
            self.uses_rospy = ROSPY.is_match(line);
        }
    }

    fn finalize(self, file: &ClassifiedFile) -> u64 {
        if !self.uses_rospy {
            return 0;
        }
        file.lines.div_ceil(SCRIPTING_LINES_PER_POINT)
    }
}

/// Flags files that import `tf` or `tf_conversions`.
#[derive(Debug, Default)]
pub struct ScriptTransformUsage {
    uses_tf: bool,
}

impl LineDetector for ScriptTransformUsage {
    fn observe(&mut self, line: &[u8]) {
        if !self.uses_tf {
            self.uses_tf =
                PY_TF_IMPORT.is_match(line) || PY_TF_CONVERSIONS_IMPORT.is_match(line);
        }
    }

    fn finalize(self, _file: &ClassifiedFile) -> u64 {
        if self.uses_tf {
            TRANSFORM_PORT_PENALTY
        } else {
            0
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptActionServerUsage {
    used: bool,
}

impl LineDetector for ScriptActionServerUsage {
    fn observe(&mut self, line: &[u8]) {
        if !self.used {
            self.used = PY_ACTION_SERVER.is_match(line);
        }
    }

    fn finalize(self, _file: &ClassifiedFile) -> u64 {
        if self.used {
            ACTION_SERVER_PENALTY
        } else {
            0
        }
    }
}
