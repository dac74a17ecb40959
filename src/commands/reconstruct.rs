//! Reconstruct command handler

use anyhow::{Context, Result};
use std::path::Path;

use pbp_ledger::batch::load_game;
use pbp_ledger::pipeline::FormalOnly;
use pbp_ledger::render::{render_table, render_warnings};
use pbp_ledger::EventReconciler;

use super::{load_config, write_output};
use crate::cli::{GlobalArgs, OutputFormat};

/// Reconstruct one game and write its ledger.
///
/// Warnings are listed on stderr after the ledger is written; the command
/// succeeds with a best-effort ledger regardless.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    global: &GlobalArgs,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    formal_only: bool,
) -> Result<()> {
    let config = load_config(global)?;
    let game = load_game(input)?;

    let mut reconciler = EventReconciler::from_config(&config);
    if formal_only {
        reconciler = reconciler.with_stage(FormalOnly);
    }
    let result = reconciler.reconstruct(&game);

    let text = match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&result.log).context("Failed to serialize ledger")?;
            json.push('\n');
            json
        }
        OutputFormat::Table => render_table(&result.log),
    };
    write_output(output, &text)?;

    if !result.is_clean() {
        eprint!("{}", render_warnings(&result.warnings));
        eprintln!(
            "{}: {} warning(s)",
            input.display(),
            result.warnings.len()
        );
    }
    Ok(())
}
