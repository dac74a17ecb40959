//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Reconciliation behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Result code given to events that are not formal plate appearances
    #[serde(default = "default_no_play_code")]
    pub no_play_code: String,
    /// Re-derive the result category from the box-score code
    #[serde(default = "default_short_code_wins")]
    pub short_code_wins: bool,
    /// Warn about box-score codes left over after the walk
    #[serde(default = "default_report_unconsumed")]
    pub report_unconsumed: bool,
}

pub fn default_no_play_code() -> String {
    "no play".to_string()
}

pub fn default_short_code_wins() -> bool {
    true
}

pub fn default_report_unconsumed() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            no_play_code: default_no_play_code(),
            short_code_wins: default_short_code_wins(),
            report_unconsumed: default_report_unconsumed(),
        }
    }
}

/// Extra keywords appended to the built-in classification tables.
///
/// Every list is empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub sacrifice: Vec<String>,
    #[serde(default)]
    pub fielders_choice: Vec<String>,
    #[serde(default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub on_base: Vec<String>,
    #[serde(default)]
    pub out: Vec<String>,
    #[serde(default)]
    pub non_plate_appearance: Vec<String>,
    #[serde(default)]
    pub plate_appearance_outcome: Vec<String>,
}

/// Multi-game reconstruction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of parallel workers (None = rayon default)
    #[serde(default)]
    pub workers: Option<usize>,
}

pub const MAX_WORKERS: usize = 64;

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if self.engine.no_play_code.trim().is_empty() {
            return Err("engine.no_play_code must not be empty".to_string());
        }
        if let Some(w) = self.batch.workers {
            if w == 0 {
                return Err("batch.workers must be > 0".to_string());
            }
            if w > MAX_WORKERS {
                return Err(format!(
                    "batch.workers must be <= {} (got {})",
                    MAX_WORKERS, w
                ));
            }
        }
        Ok(())
    }
}
