//! Test utilities for building in-memory ZIP fixtures.
//!
//! Nested-archive tests need archives-within-archives; building them
//! in memory keeps binary fixtures out of the repository.
//!
//! # Panics
//!
//! Functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored
/// uncompressed, so the output of one call can be embedded as an entry
/// of another to build nested fixtures.
///
/// # Examples
///
/// ```
/// use daznorm_core::test_utils::create_test_zip;
///
/// let inner = create_test_zip(vec![("Runtime/lib.obj", b"obj".as_slice())]);
/// let outer = create_test_zip(vec![("Product_Main.zip", inner.as_slice())]);
/// assert!(!outer.is_empty());
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(buffer));

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}
