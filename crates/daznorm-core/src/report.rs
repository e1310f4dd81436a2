//! Run and per-archive reporting.

use std::path::Path;
use std::path::PathBuf;

use crate::copy::CopyStats;

/// Outcome of processing one source archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// The source archive path.
    pub archive: PathBuf,

    /// Whether a content root was detected in the expanded tree.
    pub root_found: bool,

    /// Canonical names of category folders copied, sorted.
    pub categories: Vec<String>,

    /// Files written to the output tree.
    pub files_copied: usize,

    /// Files skipped by the promo/documentation filter.
    pub promo_skips: usize,

    /// Files skipped because the destination already existed.
    pub exists_skips: usize,

    /// Extraction failure message, if the archive could not be processed.
    pub error: Option<String>,

    /// Scratch directory retained for inspection, if keep-temp was set.
    pub kept_temp: Option<PathBuf>,
}

impl ArchiveReport {
    /// Creates an empty report for `archive`.
    #[must_use]
    pub fn new(archive: &Path) -> Self {
        Self {
            archive: archive.to_path_buf(),
            ..Self::default()
        }
    }

    /// Creates a report for an archive whose extraction failed.
    #[must_use]
    pub fn failed(archive: &Path, error: String) -> Self {
        Self {
            archive: archive.to_path_buf(),
            error: Some(error),
            ..Self::default()
        }
    }

    /// Folds copy counters into the report.
    pub fn apply(&mut self, stats: CopyStats) {
        self.files_copied = stats.files_copied;
        self.promo_skips = stats.promo_skips;
        self.exists_skips = stats.exists_skips;
        self.categories = stats.categories.into_iter().collect();
    }

    /// `true` when the archive was extracted and a content root was
    /// found. Root-not-found counts as a (soft) failure for exit-code
    /// purposes.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.error.is_none() && self.root_found
    }
}

/// Aggregated outcome of a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Per-archive reports, in processing order.
    pub archives: Vec<ArchiveReport>,
}

impl RunReport {
    /// Number of archives processed.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.archives.len()
    }

    /// Number of archives that failed extraction or root detection.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.archives.iter().filter(|a| !a.succeeded()).count()
    }

    /// `true` if any archive failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }

    /// Total files written across all archives.
    #[must_use]
    pub fn total_files_copied(&self) -> usize {
        self.archives.iter().map(|a| a.files_copied).sum()
    }
}
