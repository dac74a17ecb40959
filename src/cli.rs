//! CLI definitions for pbp
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so the completions command can build the full command tree.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "pbp")]
#[command(about = "Reconstruct a play-by-play ledger from live text and a box score")]
#[command(
    long_about = "pbp merges a game's free-text live commentary with its box score into one
chronological ledger of plate appearances. Every play is stamped with the outs and
base occupancy before it and, for formal plate appearances, the box score's result code.

QUICK START:
    pbp reconstruct game.json              Print the ledger as JSON
    pbp reconstruct game.json -f table     Print an aligned table
    pbp batch games/*.json -d ledgers/     Reconstruct many games in parallel
    pbp classify \"擊出一壘安打\"             Inspect how one fragment is read"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: ~/.config/pbp/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Ledger output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct one game
    #[command(long_about = "Reconstruct one game from a JSON input file.

The input holds the live-text fragments and the box-score rows:
    { \"game_id\": \"...\", \"fragments\": [...], \"box_score\": [...] }

Warnings about mismatches between the two sources go to stderr; the
command still succeeds with a best-effort ledger.")]
    Reconstruct {
        /// Game input JSON file
        input: PathBuf,

        /// Write the ledger here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Keep only formal plate appearances in the output
        #[arg(long)]
        formal_only: bool,
    },

    /// Reconstruct many games in parallel
    Batch {
        /// Game input JSON files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for <name>.ledger.json files (default: next to each input)
        #[arg(short = 'd', long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Number of parallel workers (overrides [batch].workers)
        #[arg(short = 'j', long, value_parser = clap::value_parser!(u16).range(1..=64))]
        workers: Option<u16>,
    },

    /// Show how a single live-text fragment is classified
    Classify {
        /// Fragment text, e.g. "陳傑憲：擊出一壘安打"
        text: String,

        /// Hitter name, when the text does not start with one
        #[arg(long)]
        hitter: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
