//! Criterion benchmarks for market_engine.
//!
//! Benchmarks cover:
//! - Position pool generation per strategy (100, 1K, 10K positions)
//! - Full market runs including pairing and ordering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use market_core::rng::MarketRng;
use market_core::types::{AccumulatorRule, Category, CategoryWeight, NumericRule};
use market_engine::generator::{generate_market_with, MarketConfig};
use market_engine::position::{
    DynamicRoulette, PositionSampler, PositionStrategy, ProportionalShare, RollAccumulator,
    StaticRoulette,
};
use market_engine::Diagnostics;

fn weights() -> Vec<CategoryWeight> {
    Category::ALL
        .iter()
        .map(|&category| CategoryWeight::new(category, 1.0))
        .collect()
}

fn rules() -> Vec<AccumulatorRule> {
    Category::ALL
        .iter()
        .map(|&category| AccumulatorRule::new(category, 2, 0.1, 0.4))
        .collect()
}

fn strategies() -> Vec<PositionStrategy> {
    vec![
        DynamicRoulette::new(weights(), weights()).into(),
        ProportionalShare::new(rules()).into(),
        RollAccumulator::new(rules()).into(),
        StaticRoulette::new(weights()).into(),
    ]
}

/// Benchmark position pool generation for each strategy.
fn bench_position_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_strategies");

    for strategy in strategies() {
        for target in [100, 1_000, 10_000] {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), target),
                &target,
                |b, &n| {
                    let mut rng = MarketRng::from_seed(42);
                    b.iter(|| {
                        let mut diagnostics = Diagnostics::new();
                        let pool = strategy.generate(&mut rng, n, &mut diagnostics).unwrap();
                        black_box(pool.len())
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark complete market runs.
fn bench_market_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("market_generation");

    for count in [100, 1_000, 10_000] {
        let config = MarketConfig::builder()
            .age_rule(NumericRule::new(count, 17.0, 35.0).unwrap())
            .level_rule(NumericRule::new(count, 1.0, 10.0).unwrap())
            .strategy(DynamicRoulette::new(weights(), weights()))
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("dynamic_roulette", count), &config, |b, cfg| {
            b.iter(|| {
                let market = generate_market_with(cfg, MarketRng::from_seed(7)).unwrap();
                black_box(market.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_position_strategies, bench_market_generation);
criterion_main!(benches);
