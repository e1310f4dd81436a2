//! Per-archive pipeline and batch driver.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::NormalizeError;
use crate::Result;
use crate::copy::copy_content;
use crate::expand::expand;
use crate::formats::ArchiveKind;
use crate::locate::locate_roots;
use crate::report::ArchiveReport;
use crate::report::RunReport;

/// Name of the shared output subtree in merge mode.
const MERGE_DIR: &str = "Content";

/// Options controlling normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Copy promo images and documentation instead of skipping them.
    pub include_promos: bool,
    /// Retain scratch extraction directories for inspection.
    pub keep_temp: bool,
    /// Merge all archives into one shared `Content/` tree instead of
    /// one output directory per archive.
    pub merge_into_content: bool,
}

impl NormalizeOptions {
    /// Sets whether promo/documentation files are copied.
    #[must_use]
    pub fn with_include_promos(mut self, include_promos: bool) -> Self {
        self.include_promos = include_promos;
        self
    }

    /// Sets whether scratch directories are retained.
    #[must_use]
    pub fn with_keep_temp(mut self, keep_temp: bool) -> Self {
        self.keep_temp = keep_temp;
        self
    }

    /// Sets merge mode.
    #[must_use]
    pub fn with_merge_into_content(mut self, merge_into_content: bool) -> Self {
        self.merge_into_content = merge_into_content;
        self
    }
}

/// Normalizes a single source archive into `output_dir`.
///
/// Pipeline: allocate a scratch directory, expand the archive (and all
/// nested archives) into it, locate the content root(s), and copy
/// recognized content into either `output_dir/Content` (merge mode) or
/// `output_dir/<stem>_normalized`. The scratch directory is removed on
/// every exit path unless `keep_temp` is set, in which case its path is
/// recorded in the report and logged.
///
/// An archive with no detectable content root is not an error: the
/// returned report has `root_found == false` and nothing is copied.
///
/// # Errors
///
/// Returns [`NormalizeError::Extraction`] if the archive cannot be
/// decoded, [`NormalizeError::OutputDir`] if the destination cannot be
/// created, or an I/O error from scratch allocation or the copy.
pub fn normalize_archive(
    archive: &Path,
    output_dir: &Path,
    options: &NormalizeOptions,
) -> Result<ArchiveReport> {
    log::info!("processing {}", archive.display());
    let mut report = ArchiveReport::new(archive);

    let scratch = TempDir::new()?;
    let result = run_pipeline(archive, scratch.path(), output_dir, options, &mut report);

    if options.keep_temp {
        let kept = scratch.keep();
        log::info!("keeping scratch directory {}", kept.display());
        report.kept_temp = Some(kept);
    }

    result?;
    Ok(report)
}

fn run_pipeline(
    archive: &Path,
    scratch: &Path,
    output_dir: &Path,
    options: &NormalizeOptions,
    report: &mut ArchiveReport,
) -> Result<()> {
    expand(archive, scratch)?;

    let roots = locate_roots(scratch);
    if roots.is_empty() {
        log::warn!("no content root found in {}", archive.display());
        return Ok(());
    }
    report.root_found = true;

    let dest = if options.merge_into_content {
        output_dir.join(MERGE_DIR)
    } else {
        output_dir.join(per_archive_dir_name(archive))
    };
    fs::create_dir_all(&dest).map_err(|e| NormalizeError::OutputDir {
        path: dest.clone(),
        source: e,
    })?;

    let stats = copy_content(&roots, &dest, options.include_promos)?;
    log::info!(
        "{}: copied {} file(s) into {}",
        archive.display(),
        stats.files_copied,
        dest.display()
    );
    report.apply(stats);
    Ok(())
}

fn per_archive_dir_name(archive: &Path) -> String {
    let stem = archive
        .file_stem()
        .map_or_else(|| "archive".into(), |s| s.to_string_lossy().into_owned());
    format!("{stem}_normalized")
}

/// Lists the archives directly inside `input_dir`, sorted by path.
///
/// Only direct children with a supported archive extension are
/// returned; subdirectories are not searched.
///
/// # Errors
///
/// Returns an I/O error if `input_dir` cannot be read.
pub fn discover_archives(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archives: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && ArchiveKind::from_path(p).is_some())
        .collect();
    archives.sort();
    Ok(archives)
}

/// Normalizes every archive found in `input_dir` into `output_dir`,
/// sequentially.
///
/// Per-archive failures (corrupt archive, unavailable decoder) are
/// recorded in the run report and do not abort the batch. Only failures
/// of the run's own plumbing — creating the output directory, listing
/// the input directory, allocating scratch space — are fatal.
///
/// # Errors
///
/// Returns [`NormalizeError::OutputDir`] if `output_dir` cannot be
/// created, or an I/O error from input listing or scratch allocation.
pub fn normalize_batch(
    input_dir: &Path,
    output_dir: &Path,
    options: &NormalizeOptions,
) -> Result<RunReport> {
    fs::create_dir_all(output_dir).map_err(|e| NormalizeError::OutputDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let archives = discover_archives(input_dir)?;
    log::info!(
        "found {} archive(s) in {}",
        archives.len(),
        input_dir.display()
    );

    let mut run = RunReport::default();
    for archive in archives {
        match normalize_archive(&archive, output_dir, options) {
            Ok(report) => run.archives.push(report),
            Err(e) if e.is_per_archive() => {
                log::warn!("failed to process {}: {e}", archive.display());
                run.archives.push(ArchiveReport::failed(&archive, e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(run)
}
