//! Batch command handler

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use pbp_ledger::batch::BatchRunner;
use tracing::info;

use super::{ledger_path, load_config, write_output};
use crate::cli::GlobalArgs;

/// Reconstruct every input in parallel and write one ledger per game.
///
/// Inputs that cannot be read are reported and skipped; the command fails
/// at the end if any did.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    global: &GlobalArgs,
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
    workers: Option<u16>,
) -> Result<()> {
    let config = load_config(global)?;
    let workers = workers.map(usize::from).or(config.batch.workers);

    let runner = BatchRunner::new(config)
        .workers(workers)
        .with_progress(|done, total| info!("Reconstructed {}/{}", done, total));
    let results = runner.run_files(inputs);

    let mut failed = 0;
    for game in &results {
        match &game.result {
            Ok(reconstruction) => {
                let path = ledger_path(&game.source, out_dir);
                let mut json = serde_json::to_string_pretty(&reconstruction.log)
                    .context("Failed to serialize ledger")?;
                json.push('\n');
                write_output(Some(&path), &json)?;
                println!(
                    "{} -> {} ({} events, {} warning(s))",
                    game.source.display(),
                    path.display(),
                    reconstruction.log.events.len(),
                    reconstruction.warnings.len()
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("error: {}", e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} input(s) could not be reconstructed", failed, results.len());
    }
    Ok(())
}
