//! Calibrated effort weights and thresholds.
//!
//! These numbers are hand-tuned estimates of relative porting effort. Changing
//! any of them changes every report, so they are kept together here.

/// File that marks a directory as a package.
pub const MANIFEST_FILE: &str = "package.xml";

/// Sentinel file that excludes a package from the active build.
pub const IGNORE_MARKER: &str = "CATKIN_IGNORE";

/// Native code lines per effort point once a file touches the legacy namespace.
pub const NAMESPACE_LINES_PER_POINT: u64 = 1000;

/// Scripting lines per effort point once a file imports the legacy framework.
/// Half the native figure: these files also need a Python 2 to 3 migration.
pub const SCRIPTING_LINES_PER_POINT: u64 = 500;

pub const TRANSFORM_PORT_PENALTY: u64 = 2;
pub const DYNAMIC_RECONFIGURE_PENALTY: u64 = 2;
pub const ACTION_SERVER_PENALTY: u64 = 2;
pub const LAUNCH_TEST_PENALTY: u64 = 1;

/// Added once to packages mixing native and scripting sources.
pub const MIXED_LANGUAGE_PENALTY: u64 = 1;

/// Unique dependencies per effort point.
pub const DEPENDENCIES_PER_POINT: u64 = 2;

/// Lowest score classified as medium.
pub const MEDIUM_THRESHOLD: u64 = 10;

/// Lowest score classified as large.
pub const LARGE_THRESHOLD: u64 = 30;
