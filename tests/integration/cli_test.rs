//! CLI behaviour of the pbp binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use pbp_ledger::event::GameEventLog;

use super::helpers::{fixtures_dir, temp_fixture};

/// pbp with an isolated (missing) config file
fn pbp(temp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pbp"));
    cmd.arg("--config")
        .arg(temp.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).to_string_lossy().into_owned()
}

// ── reconstruct ─────────────────────────────────────────────────────

#[test]
fn reconstruct_prints_json_ledger() {
    let temp = TempDir::new().unwrap();
    let output = pbp(&temp)
        .args(["reconstruct", fixture("game_basic.json").as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let log: GameEventLog = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(log.events.len(), 10);
    assert_eq!(log.events[0].result_short.as_deref(), Some("左安"));
    assert!(output.stderr.is_empty());
}

#[test]
fn reconstruct_with_warnings_still_succeeds() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["reconstruct", fixture("game_mismatch.json").as_str()])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "X (top 1): box score has no plate appearance left",
        ))
        .stderr(predicate::str::contains(
            "warning: skipped fragment 3: fragment 3: no hitter name\n",
        ))
        .stderr(predicate::str::contains(
            "warning: Z: 1 box score result(s) never matched: 二安\n",
        ))
        .stderr(predicate::str::contains("4 warning(s)"));
}

#[test]
fn reconstruct_table_format() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["reconstruct", fixture("game_basic.json").as_str(), "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Game 2024-opening\nINN"))
        .stdout(predicate::str::contains(
            "10 events, 8 plate appearances, 0 unmatched",
        ));
}

#[test]
fn reconstruct_formal_only_to_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out").join("ledger.json");
    pbp(&temp)
        .args(["reconstruct", fixture("game_basic.json").as_str(), "--formal-only", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let log: GameEventLog = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(log.events.len(), 8);
    assert!(log.events.iter().all(|e| e.is_formal_plate_appearance));
}

#[test]
fn reconstruct_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["reconstruct", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.json"));
}

#[test]
fn config_rules_are_applied() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[engine]\nno_play_code = \"NP\"\n",
    )
    .unwrap();
    let output = pbp(&temp)
        .args(["reconstruct", fixture("game_basic.json").as_str()])
        .output()
        .unwrap();
    let log: GameEventLog = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(log.events[2].result_short.as_deref(), Some("NP"));
}

// ── batch ───────────────────────────────────────────────────────────

#[test]
fn batch_writes_one_ledger_per_game() {
    let (_dir_a, basic) = temp_fixture("game_basic.json");
    let (_dir_b, mismatch) = temp_fixture("game_mismatch.json");
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("ledgers");

    pbp(&temp)
        .arg("batch")
        .arg(&basic)
        .arg(&mismatch)
        .arg("-d")
        .arg(&out_dir)
        .args(["-j", "2"])
        .assert()
        .success();

    assert!(out_dir.join("game_basic.ledger.json").exists());
    assert!(out_dir.join("game_mismatch.ledger.json").exists());
}

#[test]
fn batch_continues_past_bad_input() {
    let (dir, basic) = temp_fixture("game_basic.json");
    let missing = dir.path().join("missing.json");

    pbp(&dir)
        .arg("batch")
        .arg(&missing)
        .arg(&basic)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 input(s)"));

    assert!(dir.path().join("game_basic.ledger.json").exists());
}

// ── classify ────────────────────────────────────────────────────────

#[test]
fn classify_shows_rules_that_fire() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["classify", "陳傑憲：擊出右外野二壘安打，一壘跑者上三壘"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hitter:      陳傑憲"))
        .stdout(predicate::str::contains("category:    ON_BASE"))
        .stdout(predicate::str::contains("hitter ends: reaches second"))
        .stdout(predicate::str::contains("runner:      first -> to third"));
}

#[test]
fn classify_non_formal_with_explicit_hitter() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["classify", "投手牽制一壘", "--hitter", "林立"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formal:      no"));
}

#[test]
fn classify_without_hitter_fails() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["classify", "擊出一壘安打"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hitter name"));
}

// ── config & completions ────────────────────────────────────────────

#[test]
fn config_init_then_refuses_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    pbp(&temp).args(["config", "init"]).assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("[engine]"));

    pbp(&temp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pbp(&temp)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_path_honours_flag() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("config.toml");
    pbp(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_show_prints_defaults() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no_play_code = \"no play\""));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    pbp(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pbp"));
}
