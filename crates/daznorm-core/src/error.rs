//! Error types for archive normalization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `NormalizeError`.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors that can occur while normalizing archives.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension does not identify a supported container format.
    #[error("unsupported archive format: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Archive is corrupt, encrypted, or its decoder failed.
    #[error("failed to extract {path}: {reason}")]
    Extraction {
        /// The archive that failed to decode.
        path: PathBuf,
        /// Decoder error message.
        reason: String,
    },

    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl NormalizeError {
    /// Returns `true` if this error fails a single archive rather than
    /// the whole batch.
    ///
    /// Extraction and format errors are scoped to the archive being
    /// processed; the run continues with the next archive. Everything
    /// else (scratch allocation, output directory creation) is fatal.
    ///
    /// # Examples
    ///
    /// ```
    /// use daznorm_core::NormalizeError;
    /// use std::path::PathBuf;
    ///
    /// let err = NormalizeError::Extraction {
    ///     path: PathBuf::from("broken.zip"),
    ///     reason: "invalid central directory".to_string(),
    /// };
    /// assert!(err.is_per_archive());
    /// ```
    #[must_use]
    pub const fn is_per_archive(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. } | Self::Extraction { .. }
        )
    }
}
