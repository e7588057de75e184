//! Seedgen CLI - deterministic random streams from the command line
//!
//! # Commands
//!
//! - `seedgen stream` - Write raw words to stdout (binary, hex or decimal)
//! - `seedgen sample --kind int --low 1 --high 6` - Print bounded samples
//! - `seedgen check --ranges 4094,4095,4096` - Run chi-squared uniformity checks
//!
//! Logs go to stderr so that stdout carries only data.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seedgen_cli::commands::sample::SampleKind;
use seedgen_cli::config::{build_config, CliArgs, OutputFormat};
use seedgen_cli::{commands, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Seedgen - pure, reproducible pseudo-random generation
#[derive(Parser, Debug)]
#[command(name = "seedgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Integer the root seed is built from
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Step algorithm (pcg32, lcg64)
    #[arg(short, long, global = true)]
    algorithm: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the raw-word stream to stdout
    Stream {
        /// Number of words to write (endless if omitted)
        #[arg(short = 'n', long)]
        count: Option<u64>,

        /// Output encoding (binary, hex, decimal)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print sampled values, one per line
    Sample {
        /// Kind of value to sample
        #[arg(short, long, value_enum, default_value = "int")]
        kind: SampleKind,

        /// Lower bound (int, float)
        #[arg(long, allow_hyphen_values = true)]
        low: Option<String>,

        /// Upper bound (int, float)
        #[arg(long, allow_hyphen_values = true)]
        high: Option<String>,

        /// Number of values
        #[arg(short = 'n', long, default_value = "10")]
        count: u64,
    },

    /// Run chi-squared uniformity checks on integer range widths
    Check {
        /// Range widths to check
        #[arg(short, long, value_delimiter = ',')]
        ranges: Vec<u64>,

        /// Samples per range (defaults to the configured value)
        #[arg(long)]
        samples: Option<u64>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed,
            algorithm: cli.algorithm.clone(),
            log_level: cli.log_level.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::debug!(
        version = seedgen_cli::VERSION,
        seed = config.seed,
        algorithm = %config.algorithm,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Stream { count, format } => commands::stream::run(&config, count, format),
        Commands::Sample {
            kind,
            low,
            high,
            count,
        } => commands::sample::run(&config, kind, low.as_deref(), high.as_deref(), count),
        Commands::Check {
            ranges,
            samples,
            json,
        } => commands::check::run(&config, &ranges, samples, json),
    }
}
