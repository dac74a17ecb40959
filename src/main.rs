//! pbp - play-by-play ledger CLI entry point

mod cli;
mod commands;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};

/// Install the stderr log subscriber.
///
/// `-v`/`-vv` win over `RUST_LOG`; without them `RUST_LOG` applies, then `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Reconstruct {
            input,
            output,
            format,
            formal_only,
        } => commands::reconstruct::handle(
            &cli.global,
            &input,
            output.as_deref(),
            format,
            formal_only,
        ),
        Commands::Batch {
            inputs,
            out_dir,
            workers,
        } => commands::batch::handle(&cli.global, &inputs, out_dir.as_deref(), workers),
        Commands::Classify { text, hitter } => {
            commands::classify::handle(&cli.global, &text, hitter.as_deref())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&cli.global),
            ConfigCommands::Path => commands::config::handle_path(&cli.global),
            ConfigCommands::Init { force } => commands::config::handle_init(&cli.global, force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
