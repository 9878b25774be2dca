#![forbid(unsafe_code)]

//! Demo pages binary.
//!
//! Runs one of the two demo page scripts against scripted interactions
//! and prints the resulting view. See `demo_pages --help` for the
//! event grammar.

use clap::Parser;
use demo_pages::cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let view = run(&cli)?;
    println!("{view}");
    Ok(())
}
