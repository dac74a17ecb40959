//! Command handlers for the pbp CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod batch;
pub mod classify;
pub mod completions;
pub mod config;
pub mod reconstruct;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use pbp_ledger::Config;

use crate::cli::GlobalArgs;

/// Effective config for this invocation (`--config` or the default location).
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    Config::resolve(global.config.as_deref())
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
            fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))
        }
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

/// Output path for a batch input: `<stem>.ledger.json` in `out_dir`, or next to the input.
pub fn ledger_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "game".to_string());
    let file_name = format!("{}.ledger.json", stem);
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
