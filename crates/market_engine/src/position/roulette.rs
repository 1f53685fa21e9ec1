//! Weighted roulette selection shared by the dynamic and static strategies.

use market_core::rng::RandomSource;
use market_core::types::{Category, CategoryWeight, ConfigError};
use tracing::trace;

use crate::warning::{Diagnostics, GenerationWarning};

/// Working copy of a category weight list.
///
/// # Examples
///
/// ```rust
/// use market_core::types::{Category, CategoryWeight};
/// use market_engine::position::WeightTable;
///
/// let mut table = WeightTable::new(&[
///     CategoryWeight::new(Category::GK, 1.0),
///     CategoryWeight::new(Category::STR, 3.0),
/// ]);
///
/// // r = 0.5 * 4.0 = 2.0 lies inside STR's interval (1, 4)
/// assert_eq!(table.select(0.5), Some(Category::STR));
///
/// table.reweight(Category::STR, &[
///     CategoryWeight::new(Category::GK, 0.5),
///     CategoryWeight::new(Category::STR, 0.5),
/// ]);
/// assert_eq!(table.weight_of(Category::GK), 1.5);
/// assert_eq!(table.weight_of(Category::STR), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    entries: Vec<CategoryWeight>,
}

impl WeightTable {
    /// Copies `weights` into a new table.
    pub fn new(weights: &[CategoryWeight]) -> Self {
        Self {
            entries: weights.to_vec(),
        }
    }

    /// Returns the current entries in configuration order.
    #[inline]
    pub fn entries(&self) -> &[CategoryWeight] {
        &self.entries
    }

    /// Sum of current weights.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.weight).sum()
    }

    /// Sum of current weights carried by `category` (duplicates add up).
    pub fn weight_of(&self, category: Category) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.weight)
            .sum()
    }

    /// Maps a unit fraction onto the weight line.
    ///
    /// The entry at cumulative sum `last` matches `r = fraction * total` only
    /// when `last < r < last + weight`; boundary values fall through.
    pub fn select(&self, fraction: f64) -> Option<Category> {
        let r = fraction * self.total();
        let mut last = 0.0;
        for entry in &self.entries {
            if r > last && r < last + entry.weight {
                return Some(entry.category);
            }
            last += entry.weight;
        }
        None
    }

    /// Draws one category, substituting [`Category::FALLBACK`] when nothing
    /// matches and reporting it.
    pub fn draw<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        draw: usize,
        diagnostics: &mut Diagnostics,
    ) -> Category {
        let fraction = rng.next_unit();
        match self.select(fraction) {
            Some(category) => category,
            None => {
                diagnostics.report(GenerationWarning::SelectionFallback {
                    draw,
                    total_weight: self.total(),
                    fallback: Category::FALLBACK,
                });
                Category::FALLBACK
            }
        }
    }

    /// Zeroes every entry of `chosen` and adds the paired importance to all
    /// other entries.
    ///
    /// `importance` pairs with the entries by index and must be the same
    /// length.
    pub fn reweight(&mut self, chosen: Category, importance: &[CategoryWeight]) {
        trace!(category = %chosen, "updating weights");
        for (entry, increment) in self.entries.iter_mut().zip(importance) {
            if entry.category == chosen {
                entry.weight = 0.0;
            } else {
                entry.weight += increment.weight;
            }
        }
    }
}

/// Validates a weight list for roulette use.
pub(crate) fn validate_weights(
    strategy: &'static str,
    weights: &[CategoryWeight],
) -> Result<(), ConfigError> {
    if weights.is_empty() {
        return Err(ConfigError::EmptyCategories { strategy });
    }
    for weight in weights {
        weight.validate()?;
    }
    Ok(())
}
