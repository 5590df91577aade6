//! Porting effort estimator
//!
//! Walks a source tree, finds every package, runs line-oriented heuristics
//! over its sources and scores how much work a ROS 2 port is likely to take.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod counter;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

pub use output::{PackageRecord, ReportFormatter};
pub use scanner::{PackageFilter, PackageScanner, SizeBucket};
