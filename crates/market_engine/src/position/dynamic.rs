//! Dynamic-reweight roulette.
//!
//! Each draw picks a category by weight, then resets the chosen category's
//! weight to zero and grows every other weight by its importance. A category
//! that was just picked cannot be picked again until the others have caught
//! up, which forces variety into the pool.

use market_core::rng::RandomSource;
use market_core::types::{Category, CategoryWeight, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::roulette::{validate_weights, WeightTable};
use super::PositionSampler;
use crate::error::GenerationError;
use crate::warning::Diagnostics;

/// Roulette whose weights change after every draw.
///
/// `importance` pairs with `start_weights` by index: after a draw, entry `i`
/// grows by `importance[i].weight` unless it holds the chosen category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DynamicRoulette {
    start_weights: Vec<CategoryWeight>,
    importance: Vec<CategoryWeight>,
}

impl DynamicRoulette {
    /// Creates the strategy from start weights and paired importance values.
    pub fn new(start_weights: Vec<CategoryWeight>, importance: Vec<CategoryWeight>) -> Self {
        Self {
            start_weights,
            importance,
        }
    }

    /// Returns the weights used for the first draw.
    pub fn start_weights(&self) -> &[CategoryWeight] {
        &self.start_weights
    }

    /// Returns the per-entry importance increments.
    pub fn importance(&self) -> &[CategoryWeight] {
        &self.importance
    }
}

impl PositionSampler for DynamicRoulette {
    fn name(&self) -> &'static str {
        "dynamic_roulette"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_weights(self.name(), &self.start_weights)?;
        if self.importance.len() != self.start_weights.len() {
            return Err(ConfigError::ImportanceLengthMismatch {
                weights: self.start_weights.len(),
                importance: self.importance.len(),
            });
        }
        for increment in &self.importance {
            increment.validate()?;
        }
        Ok(())
    }

    fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        target: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Category>, GenerationError> {
        self.validate()?;

        let mut table = WeightTable::new(&self.start_weights);
        let mut pool = Vec::with_capacity(target);
        for draw in 0..target {
            let category = table.draw(rng, draw, diagnostics);
            table.reweight(category, &self.importance);
            pool.push(category);
        }

        debug!(strategy = self.name(), target, "position pool generated");
        Ok(pool)
    }
}
