//! CLI configuration management
//!
//! Settings come from a TOML file, environment variables and command-line
//! flags. Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`MARKET_SEED`, `MARKET_LOG_LEVEL`, `MARKET_FORMAT`)
//! 3. Config file
//! 4. Default values
//!
//! The file carries the market itself under a `[market]` table. Without one
//! the built-in sample market is used.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use market_core::types::{Category, CategoryWeight, ConfigError, NumericRule};
use market_engine::position::DynamicRoulette;
use market_engine::MarketConfig;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "MARKET_SEED";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "MARKET_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "MARKET_FORMAT";

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How generated markets are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per entity with its tier, then a summary
    #[default]
    Table,
    /// A single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Market definition; `None` selects the sample market
    pub market: Option<MarketConfig>,
    /// Seed override applied on top of the market's own seed
    #[serde(skip)]
    pub seed: Option<u64>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<LogLevel>().map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> std::result::Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<OutputFormat>().map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
            market: None,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content)
            .map_err(|e| CliError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| CliError::InvalidSeed(seed.clone()))?,
            );
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse::<LogLevel>()?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse::<OutputFormat>()?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    /// Market to generate, with the seed override applied
    pub fn market_config(&self) -> Result<MarketConfig> {
        let mut market = match &self.market {
            Some(market) => market.clone(),
            None => sample_market()?,
        };
        if self.seed.is_some() {
            market.set_seed(self.seed);
        }
        market.validate()?;
        Ok(market)
    }
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Output format override
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<CliConfig> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli);

    Ok(config)
}

/// The built-in market: 26 players over three age bands and three level
/// bands, positions from a dynamic roulette that favours outfield variety.
pub fn sample_market() -> std::result::Result<MarketConfig, ConfigError> {
    let start_weights = vec![
        CategoryWeight::new(Category::GK, 1.0),
        CategoryWeight::new(Category::STR, 3.0),
        CategoryWeight::new(Category::CB, 3.0),
        CategoryWeight::new(Category::LW, 2.0),
        CategoryWeight::new(Category::LB, 2.0),
        CategoryWeight::new(Category::DMC, 2.0),
        CategoryWeight::new(Category::AMC, 2.0),
        CategoryWeight::new(Category::RB, 2.0),
        CategoryWeight::new(Category::RW, 2.0),
        CategoryWeight::new(Category::MC, 3.0),
    ];
    let importance = start_weights
        .iter()
        .map(|w| {
            let step = if w.category == Category::GK { 0.5 } else { 1.0 };
            CategoryWeight::new(w.category, step)
        })
        .collect();

    MarketConfig::builder()
        .age_rule(NumericRule::new(8, 17.0, 21.0)?)
        .age_rule(NumericRule::new(12, 22.0, 29.0)?)
        .age_rule(NumericRule::new(6, 30.0, 35.0)?)
        .level_rule(NumericRule::new(14, 1.0, 6.0)?)
        .level_rule(NumericRule::new(9, 6.0, 9.0)?)
        .level_rule(NumericRule::new(3, 9.0, 10.0)?)
        .strategy(DynamicRoulette::new(start_weights, importance))
        .build()
}
