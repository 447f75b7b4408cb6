//! Summary formatting for the terminal
//!
//! The reports themselves are written by [`crate::report::ReportWriter`]; this
//! module only renders the totals printed once they are on disk.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::inventory::ScanSummary;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    report_dir: &'a Path,
    #[serde(flatten)]
    summary: &'a ScanSummary,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_summary(&self, summary: &ScanSummary, report_dir: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let output = SummaryOutput {
                    report_dir,
                    summary,
                };
                serde_json::to_string_pretty(&output)
                    .context("Failed to serialize scan summary to JSON")
            }
            OutputFormat::Human => Ok(self.format_human(summary, report_dir)),
        }
    }

    fn format_human(&self, summary: &ScanSummary, report_dir: &Path) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\u{2713} Scanned {} ({} files)\n",
            summary.folder_name, summary.files_scanned
        ));
        output.push_str(&format!("Reports written to: {}\n\n", report_dir.display()));
        output.push_str(&summary.to_string());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_summary() -> ScanSummary {
        ScanSummary {
            folder_name: "shop-api".to_string(),
            files_scanned: 12,
            endpoints: 7,
            body_parameter_mappings: 2,
            query_parameter_mappings: 1,
            path_parameter_mappings: 3,
            headers: 2,
            env_vars: 4,
            other_urls: 9,
            failed_files: 1,
        }
    }

    #[test]
    fn test_human_format() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter
            .format_summary(&create_test_summary(), Path::new("data/shop-api"))
            .unwrap();

        assert!(output.contains("Scanned shop-api (12 files)"));
        assert!(output.contains("Reports written to: data/shop-api"));
        assert!(output.contains("Total unique routes found: 7"));
        assert!(output.contains("Files that could not be read: 1"));
    }

    #[test]
    fn test_json_format() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter
            .format_summary(&create_test_summary(), Path::new("data/shop-api"))
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["report_dir"], "data/shop-api");
        assert_eq!(parsed["endpoints"], 7);
        assert_eq!(parsed["failed_files"], 1);
    }
}
