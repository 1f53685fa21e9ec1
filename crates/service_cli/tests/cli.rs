//! Binary-level tests for `market_gen`.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const CONFIG: &str = r#"
log_level = "warn"

[market]
seed = 5

[[market.age_rules]]
count = 4
min = 18.0
max = 24.0

[[market.level_rules]]
count = 4
min = 6.5
max = 8.5

[market.positions]
kind = "static_roulette"
weights = [
    { category = "CB", weight = 1.0 },
    { category = "STR", weight = 1.0 },
]
"#;

fn market_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_market_gen"))
        .args(args)
        .env_remove("MARKET_SEED")
        .env_remove("MARKET_LOG_LEVEL")
        .env_remove("MARKET_FORMAT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run market_gen")
}

fn config_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_generate_table() {
    let file = config_file(CONFIG);
    let output = market_gen(&["generate", "--config", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().filter(|l| l.contains(" | lvl ")).collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.ends_with("[regular]")));
    assert!(stdout.contains("4 entities (seed 5)"));
}

#[test]
fn test_generate_json_is_reproducible() {
    let file = config_file(CONFIG);
    let path = file.path().to_str().unwrap();

    let first = market_gen(&["generate", "-c", path, "--format", "json", "--seed", "17"]);
    let second = market_gen(&["generate", "-c", path, "--format", "json", "--seed", "17"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let value: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(value["seed"], 17);
    assert_eq!(value["entities"].as_array().unwrap().len(), 4);
}

#[test]
fn test_env_format_override() {
    let file = config_file(CONFIG);
    let output = Command::new(env!("CARGO_BIN_EXE_market_gen"))
        .args(["generate", "-c", file.path().to_str().unwrap()])
        .env("MARKET_FORMAT", "json")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
}

#[test]
fn test_check_reports_strategy() {
    let file = config_file(CONFIG);
    let output = market_gen(&["check", "--config", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("strategy: static_roulette"));
    assert!(stdout.contains("entities: 4"));
}

#[test]
fn test_check_rejects_mismatched_pools() {
    let broken = CONFIG.replace("count = 4\nmin = 6.5", "count = 5\nmin = 6.5");
    let file = config_file(&broken);
    let output = market_gen(&["check", "--config", file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Numeric pool sizes differ: ages 4, levels 5"));
}

#[test]
fn test_missing_config_file() {
    let output = market_gen(&["check", "--config", "does-not-exist.toml"]);
    assert!(!output.status.success());
}
