//! Check command implementation
//!
//! Validates the configuration without generating anything.

use market_engine::position::PositionSampler;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    let market = config.market_config()?;

    info!(
        strategy = market.positions().name(),
        entities = market.entity_count(),
        "Configuration valid"
    );

    println!("configuration OK");
    println!("  strategy: {}", market.positions().name());
    println!("  entities: {}", market.entity_count());
    match market.seed() {
        Some(seed) => println!("  seed:     {}", seed),
        None => println!("  seed:     from entropy"),
    }
    println!("  format:   {}", config.format);

    Ok(())
}
