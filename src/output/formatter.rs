use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

use super::PackageRecord;

pub const CSV_HEADER: &str = "Name,# Build Depends,# Exec Depends,# C/C++ files,\
# C/C++ source lines,# Python files,# Python source lines,# Message/Service files,\
Porting effort";

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub packages: Vec<&'a PackageRecord>,
}

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(records: &[PackageRecord], format: OutputFormat) -> Result<String> {
        let sorted = Self::sorted(records);

        match format {
            OutputFormat::Csv => Ok(Self::csv(&sorted)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonOutput {
                packages: sorted.into_iter().map(|(_, record)| record).collect(),
            })?),
        }
    }

    /// Orders records by their formatted CSV row, which in practice means by
    /// package name.
    fn sorted(records: &[PackageRecord]) -> Vec<(String, &PackageRecord)> {
        let mut rows: Vec<_> = records.iter().map(|r| (r.csv_row(), r)).collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    fn csv(rows: &[(String, &PackageRecord)]) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for (row, _) in rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::record::sample_record;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_csv_sorted_by_name() {
        let records = vec![sample_record("zed"), sample_record("alpha")];

        let out = ReportFormatter::format(&records, OutputFormat::Csv).unwrap();

        assert_eq!(
            out,
            format!("{CSV_HEADER}\nalpha,1,1,1,500,0,0,0,S\nzed,1,1,1,500,0,0,0,S\n")
        );
    }

    #[test]
    fn test_csv_empty_report_has_header() {
        let out = ReportFormatter::format(&[], OutputFormat::Csv).unwrap();
        assert_eq!(out, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_json_output() {
        let records = vec![sample_record("zed"), sample_record("alpha")];

        let out = ReportFormatter::format(&records, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let packages = value["packages"].as_array().unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0]["name"], "alpha");
        assert_eq!(packages[0]["size"], "S");
        assert_eq!(packages[0]["score"], 2);
        assert_eq!(packages[0]["breakdown"]["dependencies"], 1);
        assert_eq!(packages[1]["name"], "zed");
    }
}
