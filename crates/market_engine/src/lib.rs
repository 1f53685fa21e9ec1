//! # market_engine: Stochastic Bucket-Generation Engine
//!
//! ## Layer 2 Role
//!
//! market_engine turns declarative rules from `market_core` into a finished,
//! consistently sized market of entities:
//! - Numeric pools (ages, levels) from range+count rules (`numeric`)
//! - Position pools from one of four interchangeable strategies (`position`)
//! - Draw-without-replacement pools (`pool`)
//! - Entity assembly and run orchestration (`generator`)
//! - Display ordering by category label (`ordering`)
//! - Fatal errors and non-fatal warnings of a run (`error`, `warning`)
//!
//! ## Control Flow
//!
//! ```text
//! MarketConfig ─► numeric::sample(ages)   ─┐
//!              ─► numeric::sample(levels) ─┼─► assemble ─► order_by_category ─► Market
//!              ─► PositionStrategy        ─┘
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use market_core::rng::MarketRng;
//! use market_core::types::{Category, CategoryWeight, NumericRule};
//! use market_engine::generator::{generate_market_with, MarketConfig};
//! use market_engine::position::{PositionStrategy, StaticRoulette};
//!
//! let config = MarketConfig::builder()
//!     .age_rule(NumericRule::new(4, 18.0, 34.0).unwrap())
//!     .level_rule(NumericRule::new(4, 3.0, 10.0).unwrap())
//!     .strategy(PositionStrategy::StaticRoulette(StaticRoulette::new(vec![
//!         CategoryWeight::new(Category::GK, 1.0),
//!         CategoryWeight::new(Category::STR, 3.0),
//!     ])))
//!     .build()
//!     .unwrap();
//!
//! let market = generate_market_with(&config, MarketRng::from_seed(42)).unwrap();
//! assert_eq!(market.len(), 4);
//! ```
//!
//! ## Concurrency
//!
//! A run is synchronous and single-threaded. The random source is the only
//! mutable state; concurrent runs must each be given their own source.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod entity;
pub mod error;
pub mod generator;
pub mod numeric;
pub mod ordering;
pub mod pool;
pub mod position;
pub mod warning;

pub use entity::Entity;
pub use error::GenerationError;
pub use generator::{generate_market, generate_market_with, Market, MarketConfig, MarketGenerator};
pub use ordering::order_by_category;
pub use warning::{Diagnostics, GenerationWarning};
