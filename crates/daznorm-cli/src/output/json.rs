//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use daznorm_core::ArchiveReport;
use daznorm_core::RunReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

#[derive(Serialize)]
struct ArchiveOutput {
    archive: String,
    root_found: bool,
    categories: Vec<String>,
    files_copied: usize,
    promo_skips: usize,
    exists_skips: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kept_temp: Option<String>,
}

impl From<&ArchiveReport> for ArchiveOutput {
    fn from(report: &ArchiveReport) -> Self {
        Self {
            archive: report.archive.display().to_string(),
            root_found: report.root_found,
            categories: report.categories.clone(),
            files_copied: report.files_copied,
            promo_skips: report.promo_skips,
            exists_skips: report.exists_skips,
            error: report.error.clone(),
            kept_temp: report.kept_temp.as_ref().map(|p| p.display().to_string()),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_run_report(&self, run: &RunReport) -> Result<()> {
        #[derive(Serialize)]
        struct RunOutput {
            archives: Vec<ArchiveOutput>,
            processed: usize,
            failures: usize,
            total_files_copied: usize,
        }

        let data = RunOutput {
            archives: run.archives.iter().map(ArchiveOutput::from).collect(),
            processed: run.processed(),
            failures: run.failures(),
            total_files_copied: run.total_files_copied(),
        };

        let output = JsonOutput::success("normalize", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
