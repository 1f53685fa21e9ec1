//! Generate command implementation
//!
//! Runs one market generation and prints the result.

use market_core::rng::MarketRng;
use market_engine::MarketGenerator;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::render;
use crate::Result;

/// Run the generate command
///
/// With `unordered` the entities are printed in pairing order instead of
/// display order.
pub fn run(config: &CliConfig, unordered: bool) -> Result<()> {
    let market_config = config.market_config()?;

    let rng = match market_config.seed() {
        Some(seed) => MarketRng::from_seed(seed),
        None => MarketRng::from_entropy(),
    };
    let seed = rng.seed();
    info!(seed, format = %config.format, "Generating market");

    let mut generator = MarketGenerator::new(rng);
    let mut market = generator.generate(&market_config)?;
    if !unordered {
        market = market.ordered();
    }

    for entity in market.entities() {
        debug!("{}", entity);
    }

    let text = render::render(&market, Some(seed), config.format)?;
    println!("{}", text.trim_end());
    Ok(())
}
