//! mcpricer: Monte Carlo pricing of European and Asian options.
//!
//! # Commands
//!
//! - `mcpricer price` - price European and Asian puts and calls
//! - `mcpricer check` - validate and print the resolved configuration
//!
//! Settings come from `--config <file>`, `MCPRICER_*` environment variables
//! and flags, flags taking precedence.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod stopwatch;

pub use error::{CliError, Result};

use config::{build_config, Overrides, SchemeArg};

/// Monte Carlo option pricer
#[derive(Parser, Debug)]
#[command(name = "mcpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Number of trials per option
    #[arg(short = 'n', long, global = true)]
    paths: Option<usize>,

    /// Time steps per path
    #[arg(short, long, global = true)]
    steps: Option<usize>,

    /// Discretisation scheme
    #[arg(long, global = true, value_enum)]
    scheme: Option<SchemeArg>,

    /// Predictor-corrector drift weight in [0, 1]
    #[arg(long, global = true)]
    alpha: Option<f64>,

    /// Predictor-corrector diffusion weight in [0, 1]
    #[arg(long, global = true)]
    beta: Option<f64>,

    /// Worker threads; 1 runs sequentially, 0 uses every logical CPU
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Base seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price European and Asian puts and calls
    Price,

    /// Validate and print the resolved configuration
    Check,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            log_level: self.log_level.clone(),
            paths: self.paths,
            steps: self.steps,
            workers: self.workers,
            seed: self.seed,
            scheme: self.scheme,
            alpha: self.alpha,
            beta: self.beta,
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

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env = Overrides::from_env().context("reading MCPRICER_* environment")?;
    let config = build_config(cli.config.as_ref(), &env, &cli.overrides())
        .context("resolving configuration")?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Price => commands::price::run(&config).context("price")?,
        Commands::Check => commands::check::run(&config).context("check")?,
    }
    Ok(())
}
