//! Play-by-play ledger reconstruction.
//!
//! Merges a baseball game's free-text live commentary with its box score
//! into one chronological ledger of plays. Each play carries the outs and
//! base occupancy that existed before it and, for formal plate
//! appearances, the box score's canonical result code.
//!
//! The engine is [`EventReconciler`]; the stages it drives live in
//! [`classifier`], [`runner`] and [`boxscore`].

pub mod batch;
pub mod boxscore;
pub mod classifier;
pub mod config;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod reconciler;
pub mod render;
pub mod runner;
pub mod text;

pub use boxscore::{BoxScorePlayerQueue, BoxScoreSequenceExtractor};
pub use classifier::TextEventClassifier;
pub use config::Config;
pub use error::{EngineWarning, FragmentError, InputError};
pub use event::{AtBatEvent, GameEventLog, GameInput, Half, RawFragment, ResultCategory};
pub use reconciler::{EventReconciler, Reconstruction};
pub use runner::{HalfInningState, RunnerStateMachine};
