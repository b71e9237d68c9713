#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zhouyi() -> Command {
    Command::cargo_bin("zhouyi").unwrap()
}

// ---------------------------------------------------------------------------
// list / show
// ---------------------------------------------------------------------------

#[test]
fn list_prints_all_64() {
    zhouyi()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Creative"))
        .stdout(predicate::str::contains("Wei Ji"))
        .stdout(predicate::str::contains("64 hexagrams"));
}

#[test]
fn show_prints_one_hexagram() {
    zhouyi()
        .args(["show", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#24 Fu (Return)"))
        .stdout(predicate::str::contains("Pattern: 100000"));
}

#[test]
fn show_rejects_out_of_range_numbers() {
    zhouyi()
        .args(["show", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hexagram numbered 65"));
}

// ---------------------------------------------------------------------------
// model preference
// ---------------------------------------------------------------------------

#[test]
fn model_defaults_to_flash() {
    let config = TempDir::new().unwrap();
    zhouyi()
        .arg("model")
        .env("ZHOUYI_CONFIG_DIR", config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("model: flash"));
}

#[test]
fn model_choice_persists() {
    let config = TempDir::new().unwrap();
    zhouyi()
        .args(["model", "pro"])
        .env("ZHOUYI_CONFIG_DIR", config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("model set to pro"));

    assert!(config.path().join("config.toml").exists());

    zhouyi()
        .arg("model")
        .env("ZHOUYI_CONFIG_DIR", config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("model: pro"));
}

#[test]
fn model_rejects_unknown_variants() {
    let config = TempDir::new().unwrap();
    zhouyi()
        .args(["model", "turbo"])
        .env("ZHOUYI_CONFIG_DIR", config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown model variant"));
}

// ---------------------------------------------------------------------------
// cast (offline)
// ---------------------------------------------------------------------------

#[test]
fn cast_without_oracle_resolves_hexagrams() {
    let config = TempDir::new().unwrap();
    zhouyi()
        .args([
            "cast",
            "--auto",
            "--no-oracle",
            "--seed",
            "7",
            "--question",
            "Will the harvest be good?",
        ])
        .env("ZHOUYI_CONFIG_DIR", config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("The cast"))
        .stdout(predicate::str::contains("#"));
}

#[test]
fn cast_is_deterministic_with_a_seed() {
    let config = TempDir::new().unwrap();
    let run = || {
        zhouyi()
            .args(["cast", "--auto", "--no-oracle", "--seed", "42", "--question", "q"])
            .env("ZHOUYI_CONFIG_DIR", config.path())
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cast_without_key_fails_with_configuration_message() {
    let config = TempDir::new().unwrap();
    zhouyi()
        .args(["cast", "--auto", "--seed", "1", "--question", "q"])
        .env("ZHOUYI_CONFIG_DIR", config.path())
        .env_remove("GEMINI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("oracle is not configured"));
}

#[test]
fn cast_rejects_unknown_model() {
    let config = TempDir::new().unwrap();
    zhouyi()
        .args(["cast", "--auto", "--no-oracle", "--model", "turbo"])
        .env("ZHOUYI_CONFIG_DIR", config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown model variant"));
}
