//! 7z decoding.

use std::path::Path;

use crate::NormalizeError;
use crate::Result;

/// Decodes a 7z archive into `dest_dir`.
pub fn decode(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    sevenz_rust2::decompress_file(archive_path, dest_dir).map_err(|e| {
        NormalizeError::Extraction {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}
