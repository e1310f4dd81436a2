//! DAZ Studio asset archive normalizer.
//!
//! `daznorm-core` turns irregularly packaged DAZ Studio product archives
//! into a standardized folder layout. For each source archive it
//! recursively expands nested archives into a scratch directory, locates
//! the content root (the level where recognized category folders such as
//! `Runtime`, `People`, `Data` begin), and copies those folders into a
//! canonical output tree, optionally merging many archives into one
//! shared `Content/` tree without ever overwriting existing files.
//!
//! # Examples
//!
//! ```no_run
//! use daznorm_core::NormalizeOptions;
//! use daznorm_core::normalize_batch;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = NormalizeOptions::default().with_merge_into_content(true);
//! let run = normalize_batch("incoming/".as_ref(), "library/".as_ref(), &options)?;
//! println!("Copied {} files", run.total_files_copied());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod copy;
pub mod error;
pub mod expand;
pub mod formats;
pub mod locate;
pub mod normalize;
pub mod report;
pub mod test_utils;

// Re-export main API types
pub use copy::CopyStats;
pub use error::NormalizeError;
pub use error::Result;
pub use formats::ArchiveKind;
pub use normalize::NormalizeOptions;
pub use normalize::discover_archives;
pub use normalize::normalize_archive;
pub use normalize::normalize_batch;
pub use report::ArchiveReport;
pub use report::RunReport;
