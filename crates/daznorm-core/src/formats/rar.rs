//! RAR decoding.
//!
//! Backed by the `rar` crate, which wraps the unrar library. Extraction
//! is all-or-nothing; any decoder failure (corrupt data, unsupported
//! RAR revision) surfaces as an extraction error for the archive.

use std::path::Path;

use crate::NormalizeError;
use crate::Result;

/// Decodes a RAR archive into `dest_dir`.
pub fn decode(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    // The unrar wrapper takes string paths only.
    let path = archive_path
        .to_str()
        .ok_or_else(|| NormalizeError::Extraction {
            path: archive_path.to_path_buf(),
            reason: "archive path is not valid UTF-8".to_string(),
        })?;
    let dest = dest_dir.to_str().ok_or_else(|| NormalizeError::Extraction {
        path: archive_path.to_path_buf(),
        reason: "destination path is not valid UTF-8".to_string(),
    })?;

    rar::Archive::extract_all(path, dest, "").map_err(|e| NormalizeError::Extraction {
        path: archive_path.to_path_buf(),
        reason: format!("{e:?}"),
    })?;

    Ok(())
}
