//! Error and warning types for game reconstruction.
//!
//! Reconstruction of a single game never fails: malformed fragments and
//! mismatches between the two sources are recovered locally and surfaced
//! as [`EngineWarning`]s next to the best-effort ledger. Only reading a game
//! input from disk can fail outright ([`InputError`]).

use std::path::PathBuf;

use crate::event::Half;

/// A live-text fragment that cannot become an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error("fragment {index}: no hitter name")]
    MissingHitter { index: usize },

    #[error("fragment {index}: no play description")]
    MissingDescription { index: usize },
}

impl FragmentError {
    /// Position of the offending fragment in the input list.
    pub fn index(&self) -> usize {
        match self {
            FragmentError::MissingHitter { index } | FragmentError::MissingDescription { index } => {
                *index
            }
        }
    }
}

/// Non-fatal data inconsistency found while reconstructing a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineWarning {
    #[error("skipped fragment {index}: {reason}")]
    FragmentSkipped { index: usize, reason: String },

    #[error("{hitter} ({half} {inning}): box score has no plate appearance left")]
    QueueExhausted {
        hitter: String,
        inning: u32,
        half: Half,
    },

    #[error("{hitter} ({half} {inning}): hitter not found in box score")]
    HitterNotInBoxScore {
        hitter: String,
        inning: u32,
        half: Half,
    },

    #[error("{player}: {} box score result(s) never matched: {}", .remaining.len(), .remaining.join(", "))]
    UnconsumedCodes {
        player: String,
        remaining: Vec<String>,
    },
}

impl From<FragmentError> for EngineWarning {
    fn from(err: FragmentError) -> Self {
        EngineWarning::FragmentSkipped {
            index: err.index(),
            reason: err.to_string(),
        }
    }
}

/// Failure reading a game input file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid game input in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
