//! Non-fatal generation warnings.
//!
//! A weighted draw that matches no category, and a proportional-share
//! allocation that needed a rounding correction, both let the run finish.
//! They are logged at `warn` level and handed back to the caller with the
//! finished market.

use std::fmt;

use market_core::types::Category;
use serde::Serialize;
use tracing::warn;

/// Recoverable condition raised during a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationWarning {
    /// A roulette draw fell on no category and the fallback was used.
    SelectionFallback {
        /// Zero-based draw number within the strategy run.
        draw: usize,
        /// Total weight at the time of the draw.
        total_weight: f64,
        /// Category substituted for the missing match.
        fallback: Category,
    },

    /// Proportional-share counts did not sum to the target.
    RoundingDrift {
        /// Requested number of positions.
        target: usize,
        /// Sum of rounded per-category counts.
        allocated: usize,
        /// Target minus allocated, applied to `category`.
        drift: i64,
        /// Category at the correction index.
        category: Category,
    },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::SelectionFallback {
                draw,
                total_weight,
                fallback,
            } => write!(
                f,
                "draw {} matched no category (total weight {}); fell back to {}",
                draw, total_weight, fallback
            ),
            GenerationWarning::RoundingDrift {
                target,
                allocated,
                drift,
                category,
            } => write!(
                f,
                "rounded counts sum to {} instead of {}; applied {:+} to {}",
                allocated, target, drift, category
            ),
        }
    }
}

/// Collector for the warnings of one run.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<GenerationWarning>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs and records a warning.
    pub fn report(&mut self, warning: GenerationWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Returns the recorded warnings.
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }

    /// Returns true when nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Consumes the collector, returning the warnings.
    pub fn into_warnings(self) -> Vec<GenerationWarning> {
        self.warnings
    }
}
