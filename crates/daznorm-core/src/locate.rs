//! Content-root detection.
//!
//! A DAZ product's installable content starts at the directory whose
//! direct children are the standard category folders (`Runtime`,
//! `People`, `Data`, ...). Depending on how the product was packaged,
//! that level can be the archive root itself or buried several wrapper
//! folders deep.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Recognized category folder names, lowercase.
pub const CATEGORY_FOLDERS: [&str; 6] = [
    "data",
    "environments",
    "people",
    "props",
    "runtime",
    "scenes",
];

/// Returns the canonical capitalization for a recognized category
/// folder name, matched case-insensitively, or `None` if the name is
/// not a category.
#[must_use]
pub fn canonical_category(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "data" => Some("Data"),
        "environments" => Some("Environments"),
        "people" => Some("People"),
        "props" => Some("Props"),
        "runtime" => Some("Runtime"),
        "scenes" => Some("Scenes"),
        _ => None,
    }
}

/// Locates content roots within an expanded tree.
///
/// Breadth-first traversal by depth level starting at `tree_root`. The
/// shallowest level at which at least one directory has at least one
/// category folder as a direct child wins, and **all** qualifying
/// directories at that level are returned: a nested-archive expansion
/// can produce sibling product folders that each carry a valid root,
/// and merge mode wants content from all of them. Deeper qualifying
/// levels are never considered once a level has matched.
///
/// Returns an empty vector when no level qualifies; the caller treats
/// that as a soft, reportable skip. Directories are visited in sorted
/// order, so the result is deterministic for a given tree.
#[must_use]
pub fn locate_roots(tree_root: &Path) -> Vec<PathBuf> {
    let mut level = vec![tree_root.to_path_buf()];

    while !level.is_empty() {
        let mut qualifying = Vec::new();
        let mut next_level = Vec::new();

        for dir in &level {
            let children = sorted_subdirs(dir);
            let has_category = children.iter().any(|child| {
                child
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .is_some_and(|n| canonical_category(&n).is_some())
            });
            if has_category {
                qualifying.push(dir.clone());
            }
            next_level.extend(children);
        }

        if !qualifying.is_empty() {
            log::debug!(
                "content root(s) found: {}",
                qualifying
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return qualifying;
        }
        level = next_level;
    }

    Vec::new()
}

/// Direct subdirectories of `dir`, sorted by path. Unreadable
/// directories contribute nothing.
fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}
