//! Line patterns the detectors search for.
//!
//! Every pattern runs over the raw bytes of one line. Case-insensitive
//! patterns fold ASCII only, and `.` matches any byte but a newline.

use regex::bytes::Regex;
use std::sync::OnceLock;

pub struct Pattern {
    source: &'static str,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    pub fn is_match(&self, line: &[u8]) -> bool {
        self.regex().is_match(line)
    }

    fn regex(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            Regex::new(self.source).expect("built-in detector pattern must compile")
        })
    }
}

pub static ROS_USING_NAMESPACE: Pattern = Pattern::new(r"using namespace ros");
pub static ROS_NAMESPACE: Pattern = Pattern::new(r"ros::");
pub static TF_NAMESPACE: Pattern = Pattern::new(r"tf::");
pub static TF2_ROS_NAMESPACE: Pattern = Pattern::new(r"tf2_ros::");
pub static DYNAMIC_RECONFIGURE_NAMESPACE: Pattern = Pattern::new(r"dynamic_reconfigure::");
pub static CPP_ACTION_SERVER: Pattern = Pattern::new(r"(?i-u)actionlib::.*Server");

pub static ROSPY: Pattern = Pattern::new(r"rospy");
pub static PY_TF_IMPORT: Pattern = Pattern::new(r"import tf$");
pub static PY_TF_CONVERSIONS_IMPORT: Pattern = Pattern::new(r"from tf_conversions import");
pub static PY_ACTION_SERVER: Pattern = Pattern::new(r"(?i-u)actionlib.*Server");

pub static LAUNCH_TEST: Pattern = Pattern::new(r"(?i-u)<test");
