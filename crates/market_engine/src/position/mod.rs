//! # Position Strategies
//!
//! A position strategy produces exactly `target` categories for one run. Four
//! strategies implement different fairness and variety policies:
//!
//! | Strategy | Policy |
//! |----------|--------|
//! | [`DynamicRoulette`] | Weighted draw; chosen weight resets to 0, others grow by their importance |
//! | [`ProportionalShare`] | Rolled shares rounded to counts; legacy, may drift |
//! | [`RollAccumulator`] | Fractional accumulation of rolls, one emission per unit crossed |
//! | [`StaticRoulette`] | Independent weighted draws with fixed weights |
//!
//! Callers choose a strategy explicitly through [`PositionStrategy`]; the
//! engine has no default.
//!
//! ## Roulette Boundaries
//!
//! Both roulette strategies match a draw `r` to an entry only when
//! `running_sum < r < running_sum + weight`. A draw exactly on a cumulative
//! boundary matches no entry there; if nothing matches at all the draw
//! returns [`Category::FALLBACK`] and a warning is reported.

mod accumulator;
mod dynamic;
mod proportional;
pub mod roulette;
mod static_roulette;

pub use accumulator::{RollAccumulator, DEFAULT_MAX_CYCLES};
pub use dynamic::DynamicRoulette;
pub use proportional::{ProportionalShare, DRIFT_CORRECTION_INDEX};
pub use roulette::WeightTable;
pub use static_roulette::StaticRoulette;

use market_core::rng::RandomSource;
use market_core::types::{Category, ConfigError};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::warning::Diagnostics;

/// Capability shared by every position strategy.
///
/// Static dispatch only: implementors are selected through
/// [`PositionStrategy`].
pub trait PositionSampler {
    /// Stable strategy name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Checks the strategy configuration without drawing.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Produces exactly `target` categories.
    ///
    /// `target == 0` returns an empty pool without drawing. Recoverable
    /// conditions are reported to `diagnostics`.
    fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        target: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Category>, GenerationError>;
}

/// Caller-selected position strategy with its configuration.
///
/// Deserialises from an internally tagged table:
///
/// ```toml
/// kind = "static_roulette"
/// weights = [{ category = "GK", weight = 1.0 }]
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositionStrategy {
    /// Weighted draw with dynamic reweighting.
    DynamicRoulette(DynamicRoulette),
    /// Legacy proportional share with rounding.
    ProportionalShare(ProportionalShare),
    /// Stochastic roll accumulator.
    RollAccumulator(RollAccumulator),
    /// Weighted draw with fixed weights.
    StaticRoulette(StaticRoulette),
}

impl PositionSampler for PositionStrategy {
    fn name(&self) -> &'static str {
        match self {
            PositionStrategy::DynamicRoulette(s) => s.name(),
            PositionStrategy::ProportionalShare(s) => s.name(),
            PositionStrategy::RollAccumulator(s) => s.name(),
            PositionStrategy::StaticRoulette(s) => s.name(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            PositionStrategy::DynamicRoulette(s) => s.validate(),
            PositionStrategy::ProportionalShare(s) => s.validate(),
            PositionStrategy::RollAccumulator(s) => s.validate(),
            PositionStrategy::StaticRoulette(s) => s.validate(),
        }
    }

    fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        target: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Category>, GenerationError> {
        match self {
            PositionStrategy::DynamicRoulette(s) => s.generate(rng, target, diagnostics),
            PositionStrategy::ProportionalShare(s) => s.generate(rng, target, diagnostics),
            PositionStrategy::RollAccumulator(s) => s.generate(rng, target, diagnostics),
            PositionStrategy::StaticRoulette(s) => s.generate(rng, target, diagnostics),
        }
    }
}

impl From<DynamicRoulette> for PositionStrategy {
    fn from(strategy: DynamicRoulette) -> Self {
        PositionStrategy::DynamicRoulette(strategy)
    }
}

impl From<ProportionalShare> for PositionStrategy {
    fn from(strategy: ProportionalShare) -> Self {
        PositionStrategy::ProportionalShare(strategy)
    }
}

impl From<RollAccumulator> for PositionStrategy {
    fn from(strategy: RollAccumulator) -> Self {
        PositionStrategy::RollAccumulator(strategy)
    }
}

impl From<StaticRoulette> for PositionStrategy {
    fn from(strategy: StaticRoulette) -> Self {
        PositionStrategy::StaticRoulette(strategy)
    }
}
