//! Archive format detection.

use std::path::Path;

/// Supported archive container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// ZIP archive.
    Zip,
    /// 7z archive.
    SevenZ,
    /// RAR archive.
    Rar,
}

impl ArchiveKind {
    /// Detects the archive kind from the file extension,
    /// case-insensitively.
    ///
    /// Returns `None` for anything that is not a supported container,
    /// which callers use to tell archives apart from regular files.
    ///
    /// # Examples
    ///
    /// ```
    /// use daznorm_core::ArchiveKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(
    ///     ArchiveKind::from_path(Path::new("Product_Main.ZIP")),
    ///     Some(ArchiveKind::Zip)
    /// );
    /// assert_eq!(ArchiveKind::from_path(Path::new("readme.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "zip" => Some(Self::Zip),
            "7z" => Some(Self::SevenZ),
            "rar" => Some(Self::Rar),
            _ => None,
        }
    }
}
