//! Recursive expansion of nested archives.
//!
//! DAZ products are frequently shipped as an outer archive wrapping one
//! or more inner archives (installer splits, per-figure zips). The
//! expander decodes the outer archive, then keeps scanning the output
//! for archive files and expanding them until a scan pass finds nothing
//! new, producing a fully expanded tree for root detection.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::Result;
use crate::formats;
use crate::formats::ArchiveKind;

/// Identity of an already-expanded archive: file name plus size.
///
/// Keying on identity rather than path is what guarantees termination:
/// a self-referential archive re-extracts a copy of itself at a new
/// path on every pass, but its name and size never change, so the
/// second occurrence is refused. The trade-off is a possible false
/// positive: a genuinely different archive that shares a name and an
/// exact byte size with one already expanded is also skipped, and its
/// content is lost. Archives within one product are not built to
/// collide like that, so name+size is kept over hashing file contents.
type ArchiveId = (OsString, u64);

/// Expands `archive_path` into `dest_dir`, then expands every nested
/// archive reachable from the output, to arbitrary depth.
///
/// Each nested archive is expanded into a sibling directory named after
/// its file stem, so sibling nested archives cannot collide. Nested
/// archive files are left in place after expansion. A failed nested
/// expansion is logged and skipped; only the top-level decode can fail
/// the call.
///
/// # Errors
///
/// Returns an error if the top-level archive cannot be decoded or a
/// filesystem scan fails.
pub fn expand(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    formats::decode(archive_path, dest_dir)?;

    let mut seen: HashSet<ArchiveId> = HashSet::new();
    let mut pass = 0u32;
    loop {
        let worklist = find_nested_archives(dest_dir, &seen)?;
        if worklist.is_empty() {
            log::debug!(
                "no unexpanded archives left under {} after {pass} pass(es)",
                dest_dir.display()
            );
            break;
        }

        log::debug!("pass {pass}: expanding {} nested archive(s)", worklist.len());
        for nested in worklist {
            if let Some(id) = archive_id(&nested) {
                seen.insert(id);
            }
            let target = nested_dest(&nested);
            log::debug!("expanding nested archive {}", nested.display());
            if let Err(e) = formats::decode(&nested, &target) {
                log::warn!("skipping nested archive {}: {e}", nested.display());
            }
        }
        pass += 1;
    }

    Ok(())
}

/// Collects archive files under `root` that have not been expanded yet,
/// sorted for deterministic processing order.
fn find_nested_archives(root: &Path, seen: &HashSet<ArchiveId>) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if ArchiveKind::from_path(&path).is_none() {
            continue;
        }
        if archive_id(&path).is_some_and(|id| seen.contains(&id)) {
            continue;
        }
        found.push(path);
    }
    found.sort();
    Ok(found)
}

fn archive_id(path: &Path) -> Option<ArchiveId> {
    let name = path.file_name()?.to_os_string();
    let size = path.metadata().ok()?.len();
    Some((name, size))
}

/// Destination for a nested archive: a sibling directory named after the
/// archive's file stem.
fn nested_dest(nested: &Path) -> PathBuf {
    nested.file_stem().map_or_else(
        || nested.with_file_name("expanded"),
        |stem| nested.with_file_name(stem),
    )
}
