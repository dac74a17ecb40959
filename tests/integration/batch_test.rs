//! Parallel reconstruction of several games.

use std::fs;

use pbp_ledger::batch::BatchRunner;
use pbp_ledger::{Config, EventReconciler};
use tempfile::TempDir;

use super::helpers::{fixtures_dir, load_game_fixture};

#[test]
fn batch_matches_single_game_runs() {
    let inputs = vec![
        load_game_fixture("game_basic.json"),
        load_game_fixture("game_mismatch.json"),
        load_game_fixture("game_basic.json"),
    ];
    let batch = BatchRunner::new(Config::default())
        .workers(Some(3))
        .reconstruct_all(&inputs);

    assert_eq!(batch.len(), 3);
    for (input, result) in inputs.iter().zip(&batch) {
        assert_eq!(result, &EventReconciler::new().reconstruct(input));
    }
}

#[test]
fn run_files_reports_each_input() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("broken.json");
    fs::write(&broken, "{ \"fragments\": 3 }").unwrap();

    let paths = vec![
        fixtures_dir().join("game_basic.json"),
        broken,
        fixtures_dir().join("game_mismatch.json"),
    ];
    let results = BatchRunner::new(Config::default()).run_files(&paths);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert!(!results[1].is_success());
    assert!(results[2].is_success());
    assert_eq!(results[1].source, paths[1]);
}

#[test]
fn config_rules_reach_every_game() {
    let mut config = Config::default();
    config.engine.no_play_code = "NP".to_string();
    let inputs = vec![load_game_fixture("game_basic.json"); 2];

    for result in BatchRunner::new(config).reconstruct_all(&inputs) {
        assert_eq!(result.log.events[2].result_short.as_deref(), Some("NP"));
    }
}
