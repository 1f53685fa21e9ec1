//! Declarative generation rules.
//!
//! Rules are plain data supplied by the caller, usually deserialised from a
//! configuration file. Each rule type carries a `validate` method; the engine
//! validates every rule of a run before it makes the first draw.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::error::ConfigError;

/// Validates a `[min, max]` range.
fn validate_range(min: f64, max: f64) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::NonFiniteBound { min, max });
    }
    if min > max {
        return Err(ConfigError::InvalidRange { min, max });
    }
    if !(max - min).is_finite() {
        return Err(ConfigError::RangeOverflow { min, max });
    }
    Ok(())
}

/// Occurrence rule for a numeric attribute (age or level).
///
/// Produces exactly `count` independent uniform draws in `[min, max]`.
///
/// # Examples
///
/// ```
/// use market_core::types::NumericRule;
///
/// let rule = NumericRule::new(4, 5.0, 8.5).unwrap();
/// assert_eq!(rule.count(), 4);
///
/// assert!(NumericRule::new(1, 9.0, 2.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericRule {
    /// Number of values drawn from this rule.
    pub count: usize,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl NumericRule {
    /// Creates a validated rule.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a bound is not finite or `min > max`.
    pub fn new(count: usize, min: f64, max: f64) -> Result<Self, ConfigError> {
        let rule = Self { count, min, max };
        rule.validate()?;
        Ok(rule)
    }

    /// Returns the number of draws.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Checks that the range is finite and ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range(self.min, self.max)
    }
}

/// Weight attached to a category for roulette selection.
///
/// Also used for importance increments, which share the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeight {
    /// Weighted category.
    pub category: Category,
    /// Non-negative weight.
    pub weight: f64,
}

impl CategoryWeight {
    /// Creates a weight entry without validation.
    #[inline]
    pub fn new(category: Category, weight: f64) -> Self {
        Self { category, weight }
    }

    /// Checks that the weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                category: self.category,
                weight: self.weight,
            });
        }
        Ok(())
    }
}

/// Roll rule for accumulator-based position generation.
///
/// Each roll draws uniformly in `[min, max]`. The running total is scratch
/// state owned by the engine: it is never deserialised and must be reset at
/// the start of every generation run.
///
/// # Examples
///
/// ```
/// use market_core::types::{AccumulatorRule, Category};
///
/// let mut rule = AccumulatorRule::new(Category::CB, 2, 0.2, 0.6);
/// assert!(!rule.accumulate(0.7));
/// assert!(rule.accumulate(0.5));
/// assert!((rule.running_total() - 0.2).abs() < 1e-12);
///
/// rule.reset();
/// assert_eq!(rule.running_total(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorRule {
    /// Category emitted by this rule.
    pub category: Category,
    /// Draws per visit.
    pub roll_count: u32,
    /// Inclusive lower bound of each draw.
    pub min: f64,
    /// Inclusive upper bound of each draw.
    pub max: f64,
    #[serde(skip)]
    running_total: f64,
}

impl AccumulatorRule {
    /// Creates a rule with a zero running total.
    pub fn new(category: Category, roll_count: u32, min: f64, max: f64) -> Self {
        Self {
            category,
            roll_count,
            min,
            max,
            running_total: 0.0,
        }
    }

    /// Returns the current running total.
    #[inline]
    pub fn running_total(&self) -> f64 {
        self.running_total
    }

    /// Clears the running total.
    #[inline]
    pub fn reset(&mut self) {
        self.running_total = 0.0;
    }

    /// Adds one draw to the running total.
    ///
    /// Returns `true` when the total exceeded 1.0, in which case one unit has
    /// been consumed from it.
    pub fn accumulate(&mut self, amount: f64) -> bool {
        self.running_total += amount;
        if self.running_total > 1.0 {
            self.running_total -= 1.0;
            true
        } else {
            false
        }
    }

    /// Whether this rule can ever push its running total upwards.
    pub fn can_accumulate(&self) -> bool {
        self.roll_count > 0 && self.max > 0.0
    }

    /// Expected accumulation per visit: `roll_count * (min + max) / 2`.
    pub fn expected_rate(&self) -> f64 {
        f64::from(self.roll_count) * (self.min + self.max) / 2.0
    }

    /// Checks that the draw range is finite and ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_numeric_rule_valid() {
        let rule = NumericRule::new(3, 1.0, 1.0).unwrap();
        assert_eq!(rule.count(), 3);
        assert_eq!(rule.min(), 1.0);
        assert_eq!(rule.max(), 1.0);
    }

    #[test]
    fn test_numeric_rule_inverted_range() {
        let result = NumericRule::new(1, 2.0, 1.0);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRange { min, max }) if min == 2.0 && max == 1.0
        ));
    }

    #[test]
    fn test_numeric_rule_nan_bound() {
        let result = NumericRule::new(1, f64::NAN, 1.0);
        assert!(matches!(result, Err(ConfigError::NonFiniteBound { .. })));
    }

    #[test]
    fn test_overflowing_width_rejected() {
        let result = NumericRule::new(1, -f64::MAX, f64::MAX);
        assert!(matches!(result, Err(ConfigError::RangeOverflow { .. })));

        let rule = AccumulatorRule::new(Category::CB, 1, f64::MIN, f64::MAX / 2.0);
        assert!(matches!(
            rule.validate(),
            Err(ConfigError::RangeOverflow { .. })
        ));

        assert!(NumericRule::new(1, -f64::MAX / 2.0, f64::MAX / 2.0).is_ok());
    }

    #[test]
    fn test_category_weight_validation() {
        assert!(CategoryWeight::new(Category::GK, 0.0).validate().is_ok());
        assert!(CategoryWeight::new(Category::GK, 3.5).validate().is_ok());
        assert!(matches!(
            CategoryWeight::new(Category::RB, -0.1).validate(),
            Err(ConfigError::InvalidWeight {
                category: Category::RB,
                ..
            })
        ));
        assert!(CategoryWeight::new(Category::RB, f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_accumulate_requires_strictly_more_than_one() {
        let mut rule = AccumulatorRule::new(Category::MC, 1, 1.0, 1.0);
        assert!(!rule.accumulate(1.0));
        assert!(rule.accumulate(1.0));
        assert_relative_eq!(rule.running_total(), 1.0);
    }

    #[test]
    fn test_can_accumulate() {
        assert!(AccumulatorRule::new(Category::LW, 1, 0.0, 0.1).can_accumulate());
        assert!(!AccumulatorRule::new(Category::LW, 0, 0.0, 0.1).can_accumulate());
        assert!(!AccumulatorRule::new(Category::LW, 3, -1.0, 0.0).can_accumulate());
    }

    #[test]
    fn test_expected_rate() {
        let rule = AccumulatorRule::new(Category::AMC, 4, 0.1, 0.3);
        assert_relative_eq!(rule.expected_rate(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_running_total_not_deserialised() {
        let rule: AccumulatorRule =
            toml::from_str("category = \"CB\"\nroll_count = 2\nmin = 0.1\nmax = 0.4\n").unwrap();
        assert_eq!(rule.category, Category::CB);
        assert_eq!(rule.roll_count, 2);
        assert_eq!(rule.running_total(), 0.0);
    }
}
