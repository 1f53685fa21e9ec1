//! market_gen - Command Line Front End for the Synthetic Market Generator
//!
//! # Commands
//!
//! - `market_gen generate` - Generate one market and print it
//! - `market_gen check` - Validate a configuration without generating
//!
//! # Configuration
//!
//! Settings are layered: CLI flags override `MARKET_*` environment variables,
//! which override the TOML file given with `--config`. `RUST_LOG` overrides
//! the resolved log level. Logs go to stderr so JSON output stays clean.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel, OutputFormat};

/// Synthetic player market generator
#[derive(Parser, Debug)]
#[command(name = "market_gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one market and print it
    Generate {
        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Keep pairing order instead of sorting by category
        #[arg(long)]
        unordered: bool,
    },

    /// Validate the configuration and print what a run would produce
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level,
            ..Default::default()
        };
        if let Commands::Generate { seed, format, .. } = &self.command {
            args.seed = *seed;
            args.format = *format;
        }
        args
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
    let config = build_config(&cli.config_args()).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        log_level = %config.log_level,
        format = %config.format,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Generate { unordered, .. } => {
            commands::generate::run(&config, unordered).context("market generation failed")
        }
        Commands::Check => commands::check::run(&config).context("invalid configuration"),
    }
}
