//! Daznorm CLI - Command-line utility for normalizing DAZ Studio asset
//! archives into a standardized folder layout.

mod cli;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use daznorm_core::NormalizeOptions;
use daznorm_core::normalize_batch;

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    let options = NormalizeOptions::default()
        .with_include_promos(cli.include_promos)
        .with_keep_temp(cli.keep_temp)
        .with_merge_into_content(cli.merge_into_content);

    let run = error::add_run_context(
        normalize_batch(&cli.input_dir, &cli.output_dir, &options),
        &cli.input_dir,
        &cli.output_dir,
    )?;

    if run.processed() == 0 {
        formatter.format_warning("no archives found in input directory");
    }

    formatter.format_run_report(&run)?;

    if run.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
