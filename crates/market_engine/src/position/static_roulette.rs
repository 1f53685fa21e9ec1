//! Static roulette: independent weighted draws with fixed weights.

use market_core::rng::RandomSource;
use market_core::types::{Category, CategoryWeight, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::roulette::{validate_weights, WeightTable};
use super::PositionSampler;
use crate::error::GenerationError;
use crate::warning::Diagnostics;

/// Roulette whose weights never change between draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticRoulette {
    weights: Vec<CategoryWeight>,
}

impl StaticRoulette {
    /// Creates the strategy from fixed weights.
    pub fn new(weights: Vec<CategoryWeight>) -> Self {
        Self { weights }
    }

    /// Returns the configured weights.
    pub fn weights(&self) -> &[CategoryWeight] {
        &self.weights
    }
}

impl PositionSampler for StaticRoulette {
    fn name(&self) -> &'static str {
        "static_roulette"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_weights(self.name(), &self.weights)
    }

    fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        target: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Category>, GenerationError> {
        self.validate()?;

        let table = WeightTable::new(&self.weights);
        let mut pool = Vec::with_capacity(target);
        for draw in 0..target {
            pool.push(table.draw(rng, draw, diagnostics));
        }

        debug!(strategy = self.name(), target, "position pool generated");
        Ok(pool)
    }
}
