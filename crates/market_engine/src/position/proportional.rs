//! Proportional share with rounding (legacy).
//!
//! Every rule rolls a raw share; each category then receives
//! `round(share / total * target)` positions, rounded half to even like
//! entity ages. Rounding can leave the counts one or more short of (or over)
//! the target. The difference is pushed onto the entry at
//! [`DRIFT_CORRECTION_INDEX`] and reported as a warning. This heuristic can
//! drive that entry's count negative, which fails the run.

use market_core::rng::RandomSource;
use market_core::types::{AccumulatorRule, Category, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PositionSampler;
use crate::error::GenerationError;
use crate::warning::{Diagnostics, GenerationWarning};

/// Rule index that absorbs rounding drift.
pub const DRIFT_CORRECTION_INDEX: usize = 0;

/// Allocates positions proportionally to rolled shares.
///
/// Only `category`, `roll_count`, `min` and `max` of each rule are used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProportionalShare {
    rules: Vec<AccumulatorRule>,
}

impl ProportionalShare {
    /// Creates the strategy from roll rules.
    pub fn new(rules: Vec<AccumulatorRule>) -> Self {
        Self { rules }
    }

    /// Returns the configured rules.
    pub fn rules(&self) -> &[AccumulatorRule] {
        &self.rules
    }

    /// Rounded per-rule counts and the drift applied to reach `target`.
    fn allocate(&self, shares: &[f64], target: usize) -> (Vec<i64>, i64) {
        let total: f64 = shares.iter().sum();
        let counts: Vec<i64> = shares
            .iter()
            .map(|&share| {
                if total > 0.0 {
                    (share / total * target as f64).round_ties_even() as i64
                } else {
                    0
                }
            })
            .collect();
        let allocated: i64 = counts.iter().sum();
        (counts, target as i64 - allocated)
    }
}

impl PositionSampler for ProportionalShare {
    fn name(&self) -> &'static str {
        "proportional_share"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::EmptyCategories {
                strategy: self.name(),
            });
        }
        for rule in &self.rules {
            rule.validate()?;
            if rule.min < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name: "min",
                    value: format!(
                        "share rolls for {} must be non-negative, got {}",
                        rule.category, rule.min
                    ),
                });
            }
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
        if target == 0 {
            return Ok(Vec::new());
        }

        let shares: Vec<f64> = self
            .rules
            .iter()
            .map(|rule| {
                (0..rule.roll_count)
                    .map(|_| rng.next_in_range(rule.min, rule.max))
                    .sum::<f64>()
            })
            .collect();

        let (mut counts, drift) = self.allocate(&shares, target);
        if drift != 0 {
            let category = self.rules[DRIFT_CORRECTION_INDEX].category;
            let corrected = counts[DRIFT_CORRECTION_INDEX] + drift;
            if corrected < 0 {
                return Err(GenerationError::RoundingDrift {
                    category,
                    drift,
                    corrected,
                });
            }
            diagnostics.report(GenerationWarning::RoundingDrift {
                target,
                allocated: (target as i64 - drift) as usize,
                drift,
                category,
            });
            counts[DRIFT_CORRECTION_INDEX] = corrected;
        }

        let mut pool = Vec::with_capacity(target);
        for (rule, &count) in self.rules.iter().zip(&counts) {
            pool.extend(std::iter::repeat(rule.category).take(count as usize));
        }

        debug!(strategy = self.name(), target, drift, "position pool generated");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::rng::{MarketRng, ScriptedSource};

    fn equal_rules() -> Vec<AccumulatorRule> {
        vec![
            AccumulatorRule::new(Category::GK, 1, 0.0, 1.0),
            AccumulatorRule::new(Category::STR, 1, 0.0, 1.0),
            AccumulatorRule::new(Category::CB, 1, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_exact_allocation() {
        let strategy = ProportionalShare::new(vec![
            AccumulatorRule::new(Category::GK, 1, 0.0, 1.0),
            AccumulatorRule::new(Category::STR, 3, 0.0, 1.0),
        ]);
        // shares: GK 0.5, STR 1.5 -> 1 of 4 and 3 of 4
        let mut source = ScriptedSource::new(vec![0.5]);
        let mut diagnostics = Diagnostics::new();

        let pool = strategy.generate(&mut source, 4, &mut diagnostics).unwrap();

        assert_eq!(
            pool,
            vec![Category::GK, Category::STR, Category::STR, Category::STR]
        );
        assert!(diagnostics.is_empty());
        assert_eq!(source.draws(), 4);
    }

    #[test]
    fn test_undershoot_corrected_at_first_rule() {
        // each share rounds 4/3 down to 1; the missing one goes to GK
        let strategy = ProportionalShare::new(equal_rules());
        let mut source = ScriptedSource::new(vec![0.5]);
        let mut diagnostics = Diagnostics::new();

        let pool = strategy.generate(&mut source, 4, &mut diagnostics).unwrap();

        assert_eq!(
            pool,
            vec![Category::GK, Category::GK, Category::STR, Category::CB]
        );
        assert_eq!(
            diagnostics.warnings(),
            &[GenerationWarning::RoundingDrift {
                target: 4,
                allocated: 3,
                drift: 1,
                category: Category::GK,
            }]
        );
    }

    #[test]
    fn test_overshoot_corrected_at_first_rule() {
        // each share rounds 2/3 up to 1; GK gives one back
        let strategy = ProportionalShare::new(equal_rules());
        let mut source = ScriptedSource::new(vec![0.5]);
        let mut diagnostics = Diagnostics::new();

        let pool = strategy.generate(&mut source, 2, &mut diagnostics).unwrap();

        assert_eq!(pool, vec![Category::STR, Category::CB]);
        assert!(matches!(
            diagnostics.warnings()[0],
            GenerationWarning::RoundingDrift { drift: -1, .. }
        ));
    }

    #[test]
    fn test_half_counts_round_to_even() {
        // two equal shares of 5 give 2.5 each, both round down to 2
        let strategy = ProportionalShare::new(vec![
            AccumulatorRule::new(Category::GK, 1, 0.0, 1.0),
            AccumulatorRule::new(Category::STR, 1, 0.0, 1.0),
        ]);
        let mut source = ScriptedSource::new(vec![0.5]);
        let mut diagnostics = Diagnostics::new();

        let pool = strategy.generate(&mut source, 5, &mut diagnostics).unwrap();

        assert_eq!(
            pool,
            vec![Category::GK, Category::GK, Category::GK, Category::STR, Category::STR]
        );
        assert_eq!(
            diagnostics.warnings(),
            &[GenerationWarning::RoundingDrift {
                target: 5,
                allocated: 4,
                drift: 1,
                category: Category::GK,
            }]
        );
    }

    #[test]
    fn test_negative_correction_fails() {
        // GK rolls nothing; STR and CB both round 1.5 up to 2 for a target of 3
        let strategy = ProportionalShare::new(vec![
            AccumulatorRule::new(Category::GK, 1, 0.0, 0.0),
            AccumulatorRule::new(Category::STR, 1, 0.0, 1.0),
            AccumulatorRule::new(Category::CB, 1, 0.0, 1.0),
        ]);
        let mut source = ScriptedSource::new(vec![0.5]);

        let result = strategy.generate(&mut source, 3, &mut Diagnostics::new());

        assert_eq!(
            result,
            Err(GenerationError::RoundingDrift {
                category: Category::GK,
                drift: -1,
                corrected: -1,
            })
        );
    }

    #[test]
    fn test_zero_total_goes_to_first_rule() {
        let strategy = ProportionalShare::new(vec![
            AccumulatorRule::new(Category::LB, 1, 0.0, 0.0),
            AccumulatorRule::new(Category::RB, 0, 0.0, 1.0),
        ]);
        let mut rng = MarketRng::from_seed(5);
        let mut diagnostics = Diagnostics::new();

        let pool = strategy.generate(&mut rng, 3, &mut diagnostics).unwrap();

        assert_eq!(pool, vec![Category::LB; 3]);
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn test_negative_min_rejected() {
        let strategy =
            ProportionalShare::new(vec![AccumulatorRule::new(Category::GK, 1, -0.5, 1.0)]);
        assert!(matches!(
            strategy.validate(),
            Err(ConfigError::InvalidParameter { name: "min", .. })
        ));
    }

    #[test]
    fn test_empty_rules_rejected() {
        let strategy = ProportionalShare::new(Vec::new());
        assert_eq!(
            strategy.validate(),
            Err(ConfigError::EmptyCategories {
                strategy: "proportional_share"
            })
        );
    }
}
