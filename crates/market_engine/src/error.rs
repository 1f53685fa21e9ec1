//! Error types for the generation engine.
//!
//! Every variant aborts the run; no partial market is returned. Recoverable
//! conditions are reported as [`GenerationWarning`](crate::warning::GenerationWarning)
//! instead.

use market_core::types::{Category, ConfigError};
use thiserror::Error;

/// Fatal generation errors.
///
/// # Variants
/// - `Config`: Invalid rules or inconsistent pool sizes
/// - `InfiniteLoopGuard`: Accumulator rules that can never emit a position
/// - `GenerationTimeout`: Accumulator exhausted its cycle budget
/// - `RoundingDrift`: Proportional-share correction would produce a negative count
///
/// # Examples
/// ```
/// use market_engine::GenerationError;
///
/// let err = GenerationError::GenerationTimeout { cycles: 10, produced: 3, target: 5 };
/// assert_eq!(
///     err.to_string(),
///     "Accumulator produced 3 of 5 positions within 10 cycles"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No accumulator rule can ever reach the emission threshold.
    #[error("Accumulator can never produce {target} positions: every rule has zero rolls or a non-positive max")]
    InfiniteLoopGuard {
        /// Requested number of positions
        target: usize,
    },

    /// Accumulator did not reach the target within the cycle budget.
    #[error("Accumulator produced {produced} of {target} positions within {cycles} cycles")]
    GenerationTimeout {
        /// Cycle budget that was exhausted
        cycles: usize,
        /// Positions produced before giving up
        produced: usize,
        /// Requested number of positions
        target: usize,
    },

    /// Fixed-index rounding correction yielded a negative count.
    #[error("Rounding drift of {drift} would leave category {category} with count {corrected}")]
    RoundingDrift {
        /// Category at the correction index
        category: Category,
        /// Target minus allocated count
        drift: i64,
        /// Count after applying the drift
        corrected: i64,
    },
}
