//! Archive container formats: detection and decoding.

pub mod detect;
mod rar;
mod sevenz;
mod zip;

pub use detect::ArchiveKind;

use std::path::Path;

use crate::NormalizeError;
use crate::Result;

/// Decodes an archive fully into `dest_dir`, preserving relative paths.
///
/// The format is detected from the file extension. Corrupt input or a
/// decoder failure surfaces as [`NormalizeError::Extraction`].
///
/// # Errors
///
/// Returns [`NormalizeError::UnsupportedFormat`] if the extension is not
/// a supported container, [`NormalizeError::Extraction`] if decoding
/// fails, or an I/O error while writing output files.
pub fn decode(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let kind =
        ArchiveKind::from_path(archive_path).ok_or_else(|| NormalizeError::UnsupportedFormat {
            path: archive_path.to_path_buf(),
        })?;

    match kind {
        ArchiveKind::Zip => zip::decode(archive_path, dest_dir),
        ArchiveKind::SevenZ => sevenz::decode(archive_path, dest_dir),
        ArchiveKind::Rar => rar::decode(archive_path, dest_dir),
    }
}
