//! Numeric attribute pools.
//!
//! Ages and levels are drawn from an ordered list of [`NumericRule`]s. Each
//! rule contributes `count` independent uniform draws in `[min, max]`,
//! appended in rule order.

use market_core::rng::RandomSource;
use market_core::types::{ConfigError, NumericRule};

/// Draws a numeric pool from `rules`.
///
/// Every rule is validated before the first draw, so a malformed rule never
/// leaves the random source partially consumed.
///
/// # Errors
///
/// Returns `ConfigError` if any rule has a non-finite bound or `min > max`.
///
/// # Examples
///
/// ```rust
/// use market_core::rng::MarketRng;
/// use market_core::types::NumericRule;
/// use market_engine::numeric::sample;
///
/// let rules = [
///     NumericRule::new(2, 18.0, 21.0).unwrap(),
///     NumericRule::new(3, 30.0, 35.0).unwrap(),
/// ];
/// let mut rng = MarketRng::from_seed(3);
/// let pool = sample(&rules, &mut rng).unwrap();
///
/// assert_eq!(pool.len(), 5);
/// assert!(pool[..2].iter().all(|v| (18.0..=21.0).contains(v)));
/// assert!(pool[2..].iter().all(|v| (30.0..=35.0).contains(v)));
/// ```
pub fn sample<R: RandomSource + ?Sized>(
    rules: &[NumericRule],
    rng: &mut R,
) -> Result<Vec<f64>, ConfigError> {
    for rule in rules {
        rule.validate()?;
    }

    let mut pool = Vec::with_capacity(pool_size(rules));
    for rule in rules {
        for _ in 0..rule.count {
            pool.push(rng.next_in_range(rule.min, rule.max));
        }
    }
    Ok(pool)
}

/// Number of values [`sample`] produces for `rules`.
pub fn pool_size(rules: &[NumericRule]) -> usize {
    rules.iter().map(|rule| rule.count).sum()
}
