//! Stochastic roll accumulator.
//!
//! Rules are visited in order, cycle after cycle. Each visit performs
//! `roll_count` draws in `[min, max]` that feed the rule's running total;
//! every time the total exceeds 1.0 the rule emits its category and one unit
//! is subtracted. Generation stops mid-cycle as soon as the target is met.
//!
//! A rule contributes roughly `roll_count * (min + max) / 2` positions per
//! cycle, so the accumulator spreads positions like a Bresenham line over the
//! configured rates.

use market_core::rng::RandomSource;
use market_core::types::{AccumulatorRule, Category, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PositionSampler;
use crate::error::GenerationError;
use crate::warning::Diagnostics;

/// Default cycle budget before a run fails with a timeout.
pub const DEFAULT_MAX_CYCLES: usize = 100_000;

fn default_max_cycles() -> usize {
    DEFAULT_MAX_CYCLES
}

/// Fractional accumulation over roll rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RollAccumulator {
    rules: Vec<AccumulatorRule>,
    #[serde(default = "default_max_cycles")]
    max_cycles: usize,
}

impl RollAccumulator {
    /// Creates the strategy with the default cycle budget.
    pub fn new(rules: Vec<AccumulatorRule>) -> Self {
        Self {
            rules,
            max_cycles: DEFAULT_MAX_CYCLES,
        }
    }

    /// Overrides the cycle budget.
    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Returns the configured rules.
    pub fn rules(&self) -> &[AccumulatorRule] {
        &self.rules
    }

    /// Returns the cycle budget.
    pub fn max_cycles(&self) -> usize {
        self.max_cycles
    }
}

impl PositionSampler for RollAccumulator {
    fn name(&self) -> &'static str {
        "roll_accumulator"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::EmptyCategories {
                strategy: self.name(),
            });
        }
        if self.max_cycles == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_cycles",
                value: "must be positive".to_string(),
            });
        }
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }

    fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        target: usize,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Category>, GenerationError> {
        self.validate()?;
        if target == 0 {
            return Ok(Vec::new());
        }
        if !self.rules.iter().any(AccumulatorRule::can_accumulate) {
            return Err(GenerationError::InfiniteLoopGuard { target });
        }

        // Running totals are per-run scratch state.
        let mut working = self.rules.clone();
        for rule in working.iter_mut() {
            rule.reset();
        }

        let mut pool = Vec::with_capacity(target);
        for cycle in 0..self.max_cycles {
            for rule in working.iter_mut() {
                for _ in 0..rule.roll_count {
                    let amount = rng.next_in_range(rule.min, rule.max);
                    if rule.accumulate(amount) {
                        pool.push(rule.category);
                        if pool.len() == target {
                            debug!(
                                strategy = self.name(),
                                target,
                                cycles = cycle + 1,
                                "position pool generated"
                            );
                            return Ok(pool);
                        }
                    }
                }
            }
        }

        Err(GenerationError::GenerationTimeout {
            cycles: self.max_cycles,
            produced: pool.len(),
            target,
        })
    }
}
