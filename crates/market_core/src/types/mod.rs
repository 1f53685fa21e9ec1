//! Core domain types for market generation.
//!
//! This module provides:
//! - `category`: The closed enumeration of player categories
//! - `rules`: Numeric rules, category weights and accumulator rules
//! - `tier`: Level quality tiers for display
//! - `error`: Configuration errors raised while validating rules
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Category`] from `category`
//! - [`NumericRule`], [`CategoryWeight`], [`AccumulatorRule`] from `rules`
//! - [`QualityTier`] from `tier`
//! - [`ConfigError`], [`CategoryError`] from `error`

pub mod category;
pub mod error;
pub mod rules;
pub mod tier;

// Re-export commonly used types at module level
pub use category::Category;
pub use error::{CategoryError, ConfigError};
pub use rules::{AccumulatorRule, CategoryWeight, NumericRule};
pub use tier::QualityTier;
