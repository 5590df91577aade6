pub mod formatter;
pub mod record;

pub use formatter::{ReportFormatter, CSV_HEADER};
pub use record::PackageRecord;
