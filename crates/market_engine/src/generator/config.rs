//! Market generation configuration.
//!
//! This module provides [`MarketConfig`] and its builder. A configuration
//! bundles the age rules, level rules and the caller-selected position
//! strategy, plus an optional seed for reproducible runs.

use market_core::types::{ConfigError, NumericRule};
use serde::{Deserialize, Serialize};

use crate::numeric::pool_size;
use crate::position::{PositionSampler, PositionStrategy};

/// Market generation configuration.
///
/// Build with [`MarketConfigBuilder`] or deserialise from TOML; in both
/// cases [`MarketConfig::validate`] runs before any draw is made.
///
/// # Examples
///
/// ```rust
/// use market_core::types::{AccumulatorRule, Category, NumericRule};
/// use market_engine::generator::MarketConfig;
/// use market_engine::position::RollAccumulator;
///
/// let config = MarketConfig::builder()
///     .age_rule(NumericRule::new(10, 18.0, 35.0).unwrap())
///     .level_rule(NumericRule::new(10, 2.0, 10.0).unwrap())
///     .strategy(RollAccumulator::new(vec![
///         AccumulatorRule::new(Category::CB, 2, 0.2, 0.5),
///         AccumulatorRule::new(Category::STR, 1, 0.3, 0.6),
///     ]))
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.entity_count(), 10);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Rules for the age pool.
    age_rules: Vec<NumericRule>,
    /// Rules for the level pool.
    level_rules: Vec<NumericRule>,
    /// Position strategy and its parameters.
    positions: PositionStrategy,
    /// Optional seed for reproducibility.
    #[serde(default)]
    seed: Option<u64>,
}

impl MarketConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MarketConfigBuilder {
        MarketConfigBuilder::default()
    }

    /// Returns the age rules.
    #[inline]
    pub fn age_rules(&self) -> &[NumericRule] {
        &self.age_rules
    }

    /// Returns the level rules.
    #[inline]
    pub fn level_rules(&self) -> &[NumericRule] {
        &self.level_rules
    }

    /// Returns the position strategy.
    #[inline]
    pub fn positions(&self) -> &PositionStrategy {
        &self.positions
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Replaces the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Number of entities a run produces.
    pub fn entity_count(&self) -> usize {
        pool_size(&self.age_rules)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - any age or level rule has a non-finite bound or `min > max`
    /// - the age and level rules produce pools of different sizes
    /// - the position strategy is misconfigured
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in self.age_rules.iter().chain(&self.level_rules) {
            rule.validate()?;
        }

        let ages = pool_size(&self.age_rules);
        let levels = pool_size(&self.level_rules);
        if ages != levels {
            return Err(ConfigError::NumericPoolMismatch { ages, levels });
        }

        self.positions.validate()
    }
}

/// Builder for [`MarketConfig`].
///
/// The position strategy has no default and must be supplied.
#[derive(Clone, Debug, Default)]
pub struct MarketConfigBuilder {
    age_rules: Vec<NumericRule>,
    level_rules: Vec<NumericRule>,
    positions: Option<PositionStrategy>,
    seed: Option<u64>,
}

impl MarketConfigBuilder {
    /// Appends one age rule.
    #[inline]
    pub fn age_rule(mut self, rule: NumericRule) -> Self {
        self.age_rules.push(rule);
        self
    }

    /// Replaces all age rules.
    #[inline]
    pub fn age_rules(mut self, rules: Vec<NumericRule>) -> Self {
        self.age_rules = rules;
        self
    }

    /// Appends one level rule.
    #[inline]
    pub fn level_rule(mut self, rule: NumericRule) -> Self {
        self.level_rules.push(rule);
        self
    }

    /// Replaces all level rules.
    #[inline]
    pub fn level_rules(mut self, rules: Vec<NumericRule>) -> Self {
        self.level_rules = rules;
        self
    }

    /// Sets the position strategy.
    #[inline]
    pub fn strategy(mut self, strategy: impl Into<PositionStrategy>) -> Self {
        self.positions = Some(strategy.into());
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the strategy was not set or if
    /// [`MarketConfig::validate`] fails.
    pub fn build(self) -> Result<MarketConfig, ConfigError> {
        let positions = self.positions.ok_or(ConfigError::InvalidParameter {
            name: "strategy",
            value: "must be specified".to_string(),
        })?;

        let config = MarketConfig {
            age_rules: self.age_rules,
            level_rules: self.level_rules,
            positions,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
