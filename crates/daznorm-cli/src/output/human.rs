//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use daznorm_core::ArchiveReport;
use daznorm_core::RunReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn archive_line(&self, report: &ArchiveReport) -> String {
        let name = report
            .archive
            .file_name()
            .map_or_else(|| report.archive.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            });

        if let Some(error) = &report.error {
            let marker = if self.use_colors {
                style("✗").red().bold().to_string()
            } else {
                "FAILED".to_string()
            };
            return format!("{marker} {name}: {error}");
        }

        if !report.root_found {
            let marker = if self.use_colors {
                style("⚠").yellow().bold().to_string()
            } else {
                "SKIPPED".to_string()
            };
            return format!("{marker} {name}: no content root found");
        }

        let marker = if self.use_colors {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };
        format!(
            "{marker} {name}: {} file(s) copied ({})",
            report.files_copied,
            report.categories.join(", ")
        )
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_run_report(&self, run: &RunReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for report in &run.archives {
            let _ = self.term.write_line(&self.archive_line(report));

            if self.verbose {
                if report.promo_skips > 0 {
                    let _ = self
                        .term
                        .write_line(&format!("    promo files skipped: {}", report.promo_skips));
                }
                if report.exists_skips > 0 {
                    let _ = self.term.write_line(&format!(
                        "    already-present files skipped: {}",
                        report.exists_skips
                    ));
                }
                if let Some(kept) = &report.kept_temp {
                    let _ = self
                        .term
                        .write_line(&format!("    scratch kept at: {}", kept.display()));
                }
            }
        }

        let _ = self.term.write_line("");
        let summary = format!(
            "Processed {} archive(s), {} file(s) copied, {} failure(s)",
            run.processed(),
            run.total_files_copied(),
            run.failures()
        );
        if self.use_colors && run.has_failures() {
            let _ = self
                .term
                .write_line(&format!("{}", style(summary).yellow()));
        } else {
            let _ = self.term.write_line(&summary);
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
