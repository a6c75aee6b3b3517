//! Prints synthetic sensor packages as JSON lines.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin generate -- [COUNT] [SEED] [--reports]
//! ```
//!
//! With `--reports`, each package line is followed by its report.

use std::io::{self, Write};

use clap::Parser;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;
use training::{read_sensor_package, write_report};

/// Generate synthetic sensor packages.
#[derive(Debug, Parser)]
#[command(name = "generate", version, about = "Generate synthetic sensor packages")]
struct Args {
    /// Number of packages to generate
    count: Option<usize>,

    /// Seed for reproducible output
    seed: Option<u64>,

    /// Print the report line after each package
    #[arg(long)]
    reports: bool,
}

impl Args {
    fn config(&self) -> GenerationConfig {
        let defaults = GenerationConfig::default();
        GenerationConfig {
            count: self.count.unwrap_or(defaults.count),
            seed: self.seed.or(defaults.seed),
            ..defaults
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();

    tracing::info!(count = config.count, seed = ?config.seed, "Generating packages");

    let generator = PackageGenerator::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for package in generator.generate() {
        writeln!(out, "{}", serde_json::to_string(&package)?)?;
        if args.reports {
            let workout = read_sensor_package(&package)?;
            write_report(workout.as_training(), &mut out)?;
        }
    }

    Ok(())
}
