//! Error conversion utilities for CLI.
//!
//! Converts daznorm-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use daznorm_core::NormalizeError;
use std::path::Path;

/// Converts `NormalizeError` to a user-friendly anyhow error with context
pub fn convert_normalize_error(
    err: NormalizeError,
    input_dir: &Path,
    output_dir: &Path,
) -> anyhow::Error {
    match err {
        NormalizeError::OutputDir { path, source } => {
            anyhow!(
                "Cannot create output directory '{}': {source}\n\
                 HINT: Check that '{}' is writable.",
                path.display(),
                output_dir.display()
            )
        }
        NormalizeError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {io_err}\n\
                 HINT: Check that the input directory exists and is readable.",
                input_dir.display()
            )
        }
        NormalizeError::Extraction { path, reason } => {
            anyhow!(
                "Failed to extract '{}': {reason}\n\
                 HINT: The archive may be corrupted, or its format's decoder is unavailable.",
                path.display()
            )
        }
        NormalizeError::UnsupportedFormat { path } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported formats: zip, 7z, rar",
                path.display()
            )
        }
    }
}

/// Adds run-level context to a core result
pub fn add_run_context<T>(
    result: Result<T, NormalizeError>,
    input_dir: &Path,
    output_dir: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_normalize_error(e, input_dir, output_dir))
}
