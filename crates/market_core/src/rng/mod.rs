//! # Random Sources
//!
//! Every draw made by the generator flows through the [`RandomSource`] trait.
//! The engine never reaches for a thread-local or global generator, so a run
//! is fully determined by the source it is handed.
//!
//! ## Module Structure
//!
//! - [`prng`]: Seeded pseudo-random source backed by `rand::StdRng`
//! - [`scripted`]: Deterministic source replaying a fixed list of fractions
//!
//! ## Concurrency
//!
//! Sources are plain `&mut` state with no internal locking. Runs that execute
//! concurrently must each own an independent source.
//!
//! ## Usage Example
//!
//! ```rust
//! use market_core::rng::{MarketRng, RandomSource, ScriptedSource};
//!
//! // Seeded source for reproducible markets
//! let mut rng = MarketRng::from_seed(12345);
//! let u = rng.next_unit();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Scripted source for exact expectations in tests
//! let mut scripted = ScriptedSource::new(vec![0.25, 0.75]);
//! assert_eq!(scripted.next_unit(), 0.25);
//! assert_eq!(scripted.next_index(4), 3);
//! ```

pub mod prng;
pub mod scripted;

// Public re-exports
pub use prng::MarketRng;
pub use scripted::ScriptedSource;

/// Uniform random draws consumed by the generation engine.
///
/// Implementors must be deterministic for a given internal state so that
/// seeded runs are reproducible.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform index in `[0, upper)`.
    ///
    /// `upper` must be positive.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Returns a uniform value in the inclusive range `[min, max]`.
    ///
    /// Bounds must be finite with `min <= max`.
    fn next_in_range(&mut self, min: f64, max: f64) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }

    #[inline]
    fn next_in_range(&mut self, min: f64, max: f64) -> f64 {
        (**self).next_in_range(min, max)
    }
}

#[cfg(test)]
mod tests;
