//! Transported - passenger transportation predictor
//!
//! An interactive terminal form over a pre-trained classifier: collects
//! passenger details, runs a single inference call against a serialized
//! GBDT artifact, and renders the transportation probability as a meter
//! and a verdict.

pub mod classifier;
mod cli;
pub mod config;
pub mod passenger;
pub mod report;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG wins over --log-level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
