mod cli;
mod commands;
mod output;
mod page_range;
mod pdf;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let method = cli
        .method()
        .context("Either --pages-per-file or --page-ranges is required")?;

    commands::split::run(&cli.input_pdf, &cli.output_dir, &cli.prefix, method)?;

    Ok(())
}
