//! Market rendering for terminal output.

use std::collections::BTreeMap;
use std::fmt::Write;

use market_core::types::{Category, QualityTier};
use market_engine::{GenerationWarning, Market};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

#[derive(Serialize)]
struct EntityRow {
    category: Category,
    level: f64,
    age: i32,
    tier: QualityTier,
}

#[derive(Serialize)]
struct MarketDocument<'a> {
    seed: Option<u64>,
    entities: Vec<EntityRow>,
    counts: BTreeMap<Category, usize>,
    warnings: &'a [GenerationWarning],
}

/// Renders a market in the requested format.
pub fn render(market: &Market, seed: Option<u64>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(market, seed)),
        OutputFormat::Json => render_json(market, seed),
    }
}

/// One line per entity with its quality tier, a per-category summary, then
/// any warnings.
pub fn render_table(market: &Market, seed: Option<u64>) -> String {
    let mut out = String::new();

    for entity in market.entities() {
        let _ = writeln!(out, "{:<28} [{}]", entity.to_string(), entity.tier());
    }

    let counts = market
        .category_counts()
        .iter()
        .map(|(category, count)| format!("{} {}", category, count))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "--");
    match seed {
        Some(seed) => {
            let _ = writeln!(out, "{} entities (seed {}): {}", market.len(), seed, counts);
        }
        None => {
            let _ = writeln!(out, "{} entities: {}", market.len(), counts);
        }
    }

    for warning in market.warnings() {
        let _ = writeln!(out, "warning: {}", warning);
    }

    out
}

/// Pretty-printed JSON document of the market.
pub fn render_json(market: &Market, seed: Option<u64>) -> Result<String> {
    let document = MarketDocument {
        seed,
        entities: market
            .entities()
            .iter()
            .map(|e| EntityRow {
                category: e.category(),
                level: e.level(),
                age: e.age(),
                tier: e.tier(),
            })
            .collect(),
        counts: market.category_counts(),
        warnings: market.warnings(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
