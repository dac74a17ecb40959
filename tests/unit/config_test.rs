//! Unit tests for configuration

use pbp_ledger::config::{Config, MAX_WORKERS};

#[test]
fn default_config_serializes_all_sections() {
    let text = toml::to_string_pretty(&Config::default()).unwrap();
    assert!(text.contains("[engine]"));
    assert!(text.contains("no_play_code = \"no play\""));
    assert!(text.contains("[rules]"));
}

#[test]
fn empty_file_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn max_workers_is_accepted() {
    let mut config = Config::default();
    config.batch.workers = Some(MAX_WORKERS);
    assert!(config.validate().is_ok());
}

#[test]
fn load_from_file_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[engine]\nno_play_code = \"NP\"\nshort_code_wins = false\n\n[batch]\nworkers = 2\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.engine.no_play_code, "NP");
    assert!(!config.engine.short_code_wins);
    assert!(config.engine.report_unconsumed);
    assert_eq!(config.batch.workers, Some(2));
}
