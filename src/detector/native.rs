//! Detectors for C and C++ sources.

use super::patterns::{
    CPP_ACTION_SERVER, DYNAMIC_RECONFIGURE_NAMESPACE, ROS_NAMESPACE, ROS_USING_NAMESPACE,
    TF2_ROS_NAMESPACE, TF_NAMESPACE,
};
use super::LineDetector;
use crate::classifier::ClassifiedFile;
use crate::config::{
    ACTION_SERVER_PENALTY, DYNAMIC_RECONFIGURE_PENALTY, NAMESPACE_LINES_PER_POINT,
    TRANSFORM_PORT_PENALTY,
};

/// Flags files that touch the `ros` namespace at all. The penalty scales
/// with the file's size.
#[derive(Debug, Default)]
pub struct LegacyNamespaceUsage {
    uses_ros: bool,
}

impl LineDetector for LegacyNamespaceUsage {
    fn observe(&mut self, line: &[u8]) {
        if self.uses_ros {
            return;
        }
        self.uses_ros = ROS_USING_NAMESPACE.is_match(line) || ROS_NAMESPACE.is_match(line);
    }

    fn finalize(self, file: &ClassifiedFile) -> u64 {
        if !self.uses_ros {
            return 0;
        }
        file.lines.div_ceil(NAMESPACE_LINES_PER_POINT)
    }
}

/// Flags files on `tf` that have not started moving to `tf2_ros`.
#[derive(Debug, Default)]
pub struct TransformUsage {
    uses_tf: bool,
    uses_tf2_ros: bool,
}

impl LineDetector for TransformUsage {
    fn observe(&mut self, line: &[u8]) {
        if !self.uses_tf {
            self.uses_tf = TF_NAMESPACE.is_match(line);
        }
        if !self.uses_tf2_ros {
            self.uses_tf2_ros = TF2_ROS_NAMESPACE.is_match(line);
        }
    }

    fn finalize(self, _file: &ClassifiedFile) -> u64 {
        if self.uses_tf && !self.uses_tf2_ros {
            TRANSFORM_PORT_PENALTY
        } else {
            0
        }
    }
}

/// dynamic_reconfigure servers become ROS 2 parameters.
#[derive(Debug, Default)]
pub struct DynamicReconfigureUsage {
    used: bool,
}

impl LineDetector for DynamicReconfigureUsage {
    fn observe(&mut self, line: &[u8]) {
        if !self.used {
            self.used = DYNAMIC_RECONFIGURE_NAMESPACE.is_match(line);
        }
    }

    fn finalize(self, _file: &ClassifiedFile) -> u64 {
        if self.used {
            DYNAMIC_RECONFIGURE_PENALTY
        } else {
            0
        }
    }
}

#[derive(Debug, Default)]
pub struct ActionServerUsage {
    used: bool,
}

impl LineDetector for ActionServerUsage {
    fn observe(&mut self, line: &[u8]) {
        if !self.used {
            self.used = CPP_ACTION_SERVER.is_match(line);
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
