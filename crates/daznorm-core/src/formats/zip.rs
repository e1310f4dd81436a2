//! ZIP decoding.

use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::NormalizeError;
use crate::Result;

/// Decodes a ZIP archive into `dest_dir`.
///
/// Entries without a safe enclosed name (absolute paths, `..`
/// components) are skipped rather than extracted.
pub fn decode(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| NormalizeError::Extraction {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| NormalizeError::Extraction {
                path: archive_path.to_path_buf(),
                reason: format!("entry {i}: {e}"),
            })?;

        let Some(entry_path) = entry.enclosed_name() else {
            log::warn!(
                "skipping zip entry with unsafe path in {}: {}",
                archive_path.display(),
                entry.name()
            );
            continue;
        };

        let output_path = dest_dir.join(entry_path);
        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_zip;
    use tempfile::TempDir;

    #[test]
    fn test_decode_preserves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let data = create_test_zip(vec![
            ("Runtime/Textures/skin.jpg", b"jpeg".as_slice()),
            ("People/Genesis/figure.duf", b"duf".as_slice()),
        ]);
        let archive = temp.path().join("product.zip");
        fs::write(&archive, data).unwrap();

        let out = TempDir::new().unwrap();
        decode(&archive, out.path()).unwrap();

        assert!(out.path().join("Runtime/Textures/skin.jpg").is_file());
        assert!(out.path().join("People/Genesis/figure.duf").is_file());
    }

    #[test]
    fn test_decode_invalid_data() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("broken.zip");
        fs::write(&archive, b"garbage").unwrap();

        let result = decode(&archive, temp.path());
        assert!(matches!(result, Err(NormalizeError::Extraction { .. })));
    }
}
