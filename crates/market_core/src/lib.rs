//! # market_core: Foundation for the Synthetic Market Generator
//!
//! ## Layer 1 (Foundation) Role
//!
//! market_core is the bottom layer of the generator workspace, providing:
//! - The closed set of player categories (`types::category`)
//! - Declarative generation rules: numeric ranges, category weights and
//!   accumulator rolls (`types::rules`)
//! - Level quality tiers used by renderers (`types::tier`)
//! - Configuration error types (`types::error`)
//! - Random sources: the [`RandomSource`](rng::RandomSource) seam, a seeded
//!   PRNG and a scripted source for deterministic tests (`rng`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other market_* crates, with minimal external dependencies:
//! - rand / rand_distr: seeded uniform draws
//! - thiserror: error derivation
//! - serde: rule deserialisation from configuration files
//!
//! ## Usage Examples
//!
//! ```rust
//! use market_core::rng::{MarketRng, RandomSource};
//! use market_core::types::{Category, NumericRule, QualityTier};
//!
//! let rule = NumericRule::new(3, 18.0, 34.0).unwrap();
//! assert_eq!(rule.count(), 3);
//!
//! let mut rng = MarketRng::from_seed(7);
//! let age = rng.next_in_range(rule.min(), rule.max());
//! assert!((18.0..=34.0).contains(&age));
//!
//! assert_eq!(Category::STR.label(), "STR");
//! assert_eq!(QualityTier::from_level(7.5), QualityTier::Regular);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod types;
