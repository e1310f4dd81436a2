//! Category-folder copy with promo filtering and merge-safe semantics.
//!
//! Copies content from detected roots into an output tree. Category
//! folders are always copied in full; loose files and non-category
//! directories at the root level (promo previews, documentation,
//! template folders) are treated as promotional material and skipped
//! unless explicitly included. Existing destination files are never
//! overwritten, which is what makes merging many archives into one
//! output tree safe.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::Result;
use crate::formats::ArchiveKind;
use crate::locate::canonical_category;

/// Extensions classified as promotional/documentation material,
/// lowercase.
pub const PROMO_EXTS: [&str; 9] = [
    "doc", "docx", "gif", "jpeg", "jpg", "pdf", "png", "rtf", "txt",
];

/// Counters accumulated while copying content roots.
#[derive(Debug, Clone, Default)]
pub struct CopyStats {
    /// Files written to the output tree.
    pub files_copied: usize,
    /// Files or subtrees skipped by the promo/documentation heuristic.
    pub promo_skips: usize,
    /// Files skipped because the destination already existed.
    pub exists_skips: usize,
    /// Canonical names of category folders that contributed content.
    pub categories: BTreeSet<String>,
}

/// Copies recognized content from each root in `roots` into `dest`.
///
/// For every direct child of a root:
///
/// - a directory matching a category folder name is copied recursively
///   to `dest/<CanonicalName>/...` (canonical capitalization, so
///   `runtime/` and `RUNTIME/` from different archives merge);
/// - any other directory or a promo-extension file is skipped, or
///   copied under its own name when `include_promos` is set;
/// - other loose files are copied as-is.
///
/// Files inside a category folder are never promo-filtered; `.jpg`
/// under `Runtime/Textures` is texture data, not a promo shot. Archive
/// files (`.zip`, `.7z`, `.rar`) are never copied anywhere: by the time
/// the copier runs they are spent containers whose contents already sit
/// expanded next to them. Destination files that already exist are left
/// untouched and counted as skips.
///
/// # Errors
///
/// Returns an error on filesystem failures (unreadable source,
/// unwritable destination).
pub fn copy_content(roots: &[PathBuf], dest: &Path, include_promos: bool) -> Result<CopyStats> {
    let mut stats = CopyStats::default();
    for root in roots {
        copy_root(root, dest, include_promos, &mut stats)?;
    }
    Ok(stats)
}

fn copy_root(root: &Path, dest: &Path, include_promos: bool, stats: &mut CopyStats) -> Result<()> {
    for child in sorted_children(root)? {
        let name = child
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if child.is_dir() {
            if let Some(canonical) = canonical_category(&name) {
                copy_tree(&child, &dest.join(canonical), stats)?;
                stats.categories.insert(canonical.to_string());
            } else if include_promos {
                copy_tree(&child, &dest.join(&name), stats)?;
            } else {
                let skipped = file_count(&child);
                log::debug!("skipping non-category folder {name} ({skipped} file(s))");
                stats.promo_skips += skipped;
            }
        } else if ArchiveKind::from_path(&child).is_some() {
            log::debug!("leaving expanded archive container behind: {name}");
        } else if !include_promos && is_promo_file(&child) {
            log::debug!("skipping promo file {}", child.display());
            stats.promo_skips += 1;
        } else {
            copy_file(&child, &dest.join(&name), stats)?;
        }
    }
    Ok(())
}

/// Recursively copies `src` into `dest`, preserving relative paths and
/// never overwriting existing files.
fn copy_tree(src: &Path, dest: &Path, stats: &mut CopyStats) -> Result<()> {
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if ArchiveKind::from_path(entry.path()).is_some() {
            log::debug!(
                "leaving expanded archive container behind: {}",
                entry.path().display()
            );
        } else {
            copy_file(entry.path(), &target, stats)?;
        }
    }
    Ok(())
}

/// Copies one file, skipping (and recording) if the destination exists.
fn copy_file(src: &Path, dest: &Path, stats: &mut CopyStats) -> Result<()> {
    if dest.exists() {
        log::debug!("already exists, skipping: {}", dest.display());
        stats.exists_skips += 1;
        return Ok(());
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    stats.files_copied += 1;
    Ok(())
}

fn is_promo_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| PROMO_EXTS.contains(&ext.as_str()))
}

fn file_count(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .collect();
    children.sort();
    Ok(children)
}
