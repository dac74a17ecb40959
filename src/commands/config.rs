//! Config subcommands handler

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use pbp_ledger::Config;

use super::load_config;
use crate::cli::GlobalArgs;

fn target_path(global: &GlobalArgs) -> Result<PathBuf> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the path of the configuration file in use.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(global: &GlobalArgs) -> Result<()> {
    println!("{}", target_path(global)?.display());
    Ok(())
}

/// Write the default configuration, refusing to overwrite unless forced.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(global: &GlobalArgs, force: bool) -> Result<()> {
    let path = target_path(global)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
