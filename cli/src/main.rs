//! Command-line frontend.
//!
//! Reads test cases from standard input (or a file) and prints the answer to
//! every query on standard output. Log messages go to standard error.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};

mod config;

use config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    simple_logger::init_with_level(config.log_level).context("Error initializing logger")?;
    info!("Starting cubesum v{} ...", env!("CARGO_PKG_VERSION"));

    let input: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("Error opening input file {}", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };
    let output = BufWriter::new(io::stdout().lock());

    let summary = cubesum_core::io::run(input, output, &config.run_options())
        .context("Error running test cases")?;
    info!(
        "Processed {} cases ({} updates, {} queries)",
        summary.cases, summary.updates, summary.queries,
    );
    Ok(())
}
