//! Market generation orchestration.
//!
//! A run samples the age and level pools, asks the configured position
//! strategy for a pool of the same size, then pairs the three pools into
//! entities by drawing without replacement.
//!
//! ## Draw Order
//!
//! All randomness flows through a single [`RandomSource`]:
//!
//! 1. ages, rule by rule
//! 2. levels, rule by rule
//! 3. positions, as the strategy consumes them
//! 4. per entity: one position index, one level index, one age index
//!
//! Given the same configuration and the same seeded source, a run is fully
//! reproducible.

mod config;

pub use config::{MarketConfig, MarketConfigBuilder};

use std::collections::BTreeMap;

use market_core::rng::{MarketRng, RandomSource};
use market_core::types::{Category, ConfigError};
use serde::Serialize;
use tracing::{debug, info};

use crate::entity::Entity;
use crate::error::GenerationError;
use crate::numeric;
use crate::ordering::order_by_category;
use crate::pool::DrawPool;
use crate::position::PositionSampler;
use crate::warning::{Diagnostics, GenerationWarning};

/// Result of one market run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Market {
    entities: Vec<Entity>,
    warnings: Vec<GenerationWarning>,
}

impl Market {
    /// Returns the generated entities.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the non-fatal warnings reported during the run.
    #[inline]
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }

    /// Consumes the market, returning its entities.
    #[inline]
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    /// Number of entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the market holds no entities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities per category. Categories with no entity are absent.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(entity.category()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the market with its entities in display order.
    pub fn ordered(self) -> Self {
        Self {
            entities: order_by_category(self.entities),
            warnings: self.warnings,
        }
    }
}

/// Runs market generation against a random source.
///
/// The generator owns its source, so consecutive runs continue the same
/// random stream.
#[derive(Debug)]
pub struct MarketGenerator<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> MarketGenerator<R> {
    /// Creates a generator over `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Generates one market in pairing order.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Config` for any invalid configuration, before
    /// any draw is made, or the strategy's own fatal error.
    pub fn generate(&mut self, config: &MarketConfig) -> Result<Market, GenerationError> {
        config.validate()?;

        let ages = numeric::sample(config.age_rules(), &mut self.rng)?;
        let levels = numeric::sample(config.level_rules(), &mut self.rng)?;
        if ages.len() != levels.len() {
            return Err(ConfigError::NumericPoolMismatch {
                ages: ages.len(),
                levels: levels.len(),
            }
            .into());
        }

        let mut diagnostics = Diagnostics::new();
        let strategy = config.positions();
        let positions = strategy.generate(&mut self.rng, ages.len(), &mut diagnostics)?;

        let entities = assemble(ages, levels, positions, &mut self.rng)?;

        info!(
            strategy = strategy.name(),
            entities = entities.len(),
            warnings = diagnostics.warnings().len(),
            "market generated"
        );

        Ok(Market {
            entities,
            warnings: diagnostics.into_warnings(),
        })
    }
}

/// Pairs pre-built pools into entities.
///
/// Each entity draws, uniformly among the remaining entries and in this
/// order, one position, one level and one age. Every pool value is used
/// exactly once.
///
/// # Errors
///
/// Returns `ConfigError` if the pool lengths differ.
pub fn assemble<R: RandomSource + ?Sized>(
    ages: Vec<f64>,
    levels: Vec<f64>,
    positions: Vec<Category>,
    rng: &mut R,
) -> Result<Vec<Entity>, ConfigError> {
    if ages.len() != levels.len() {
        return Err(ConfigError::NumericPoolMismatch {
            ages: ages.len(),
            levels: levels.len(),
        });
    }
    if positions.len() != ages.len() {
        return Err(ConfigError::PositionPoolMismatch {
            expected: ages.len(),
            actual: positions.len(),
        });
    }

    let count = ages.len();
    let mut ages = DrawPool::new(ages);
    let mut levels = DrawPool::new(levels);
    let mut positions = DrawPool::new(positions);

    let mut entities = Vec::with_capacity(count);
    while let Some(category) = positions.draw(rng) {
        // lengths were checked above, so the numeric pools drain in lockstep
        let (Some(level), Some(age)) = (levels.draw(rng), ages.draw(rng)) else {
            break;
        };
        entities.push(Entity::from_draws(category, level, age));
    }

    Ok(entities)
}

/// Generates an ordered market, seeding from the configuration.
///
/// Without a configured seed the source is seeded from entropy; the seed in
/// use is logged so the run can be replayed.
///
/// # Errors
///
/// See [`MarketGenerator::generate`].
pub fn generate_market(config: &MarketConfig) -> Result<Market, GenerationError> {
    let rng = match config.seed() {
        Some(seed) => MarketRng::from_seed(seed),
        None => MarketRng::from_entropy(),
    };
    debug!(seed = rng.seed(), "market seed");
    generate_market_with(config, rng)
}

/// Generates an ordered market from an explicit random source.
///
/// # Errors
///
/// See [`MarketGenerator::generate`].
pub fn generate_market_with<R: RandomSource>(
    config: &MarketConfig,
    rng: R,
) -> Result<Market, GenerationError> {
    let mut generator = MarketGenerator::new(rng);
    Ok(generator.generate(config)?.ordered())
}
