//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daznorm")]
#[command(author, version)]
#[command(about = "Normalize DAZ Studio asset archives into a standardized folder layout")]
pub struct Cli {
    /// Directory containing .zip/.7z/.rar archives to normalize
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory where normalized output is written (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Include promo images, PDFs, and documentation instead of skipping them
    #[arg(long)]
    pub include_promos: bool,

    /// Keep temporary extraction directories for inspection
    #[arg(long)]
    pub keep_temp: bool,

    /// Merge all archives into one shared Content/ tree suitable for
    /// direct DAZ installation
    #[arg(long)]
    pub merge_into_content: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
