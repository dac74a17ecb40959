//! Game reconstruction entry point.
//!
//! [`EventReconciler`] drives the whole engine for one game:
//!
//! 1. classify every live-text fragment, dropping noise and malformed ones;
//! 2. walk the events through the [`RunnerStateMachine`];
//! 3. build one box-score queue per player;
//! 4. walk the events again, giving each formal plate appearance the next
//!    code from its hitter's queue ([`ShortCodeAssigner`]);
//! 5. run any caller-supplied post stages.
//!
//! Reconstruction never fails. Data inconsistencies become
//! [`EngineWarning`]s returned next to the best-effort ledger.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::boxscore::{category_for_code, BoxScorePlayerQueue, BoxScoreSequenceExtractor};
use crate::classifier::{ClassifierRules, TextEventClassifier};
use crate::config::{Config, EngineConfig};
use crate::error::EngineWarning;
use crate::event::{AtBatEvent, GameEventLog, GameInput};
use crate::pipeline::{Transform, TransformChain};
use crate::runner::RunnerStateMachine;

/// Ledger plus the warnings collected while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconstruction {
    pub log: GameEventLog,
    pub warnings: Vec<EngineWarning>,
}

impl Reconstruction {
    /// True when both sources lined up without any inconsistency.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Assigns box-score codes to events in order.
///
/// Formal plate appearances pop the next code from their hitter's queue;
/// other events get the no-play code and consume nothing.
pub struct ShortCodeAssigner {
    queues: HashMap<String, BoxScorePlayerQueue>,
    options: EngineConfig,
    warnings: Vec<EngineWarning>,
}

impl ShortCodeAssigner {
    pub fn new(queues: HashMap<String, BoxScorePlayerQueue>, options: EngineConfig) -> Self {
        Self {
            queues,
            options,
            warnings: Vec::new(),
        }
    }

    /// Give one event its result code.
    pub fn assign(&mut self, event: &mut AtBatEvent) {
        if !event.is_formal_plate_appearance {
            event.result_short = Some(self.options.no_play_code.clone());
            event.unmatched = false;
            return;
        }

        let hitter = event.hitter_name.clone();
        let (inning, half) = event.half_inning();

        let Some(queue) = self.queues.get_mut(&hitter) else {
            let warning = EngineWarning::HitterNotInBoxScore {
                hitter,
                inning,
                half,
            };
            self.unmatched(event, warning);
            return;
        };

        let Some(code) = queue.pop_front() else {
            let warning = EngineWarning::QueueExhausted {
                hitter,
                inning,
                half,
            };
            self.unmatched(event, warning);
            return;
        };

        if self.options.short_code_wins {
            if let Some(category) = category_for_code(&code) {
                if category != event.result_category {
                    debug!(
                        hitter = %event.hitter_name,
                        code = %code,
                        from = %event.result_category,
                        to = %category,
                        "Box score code overrides text category"
                    );
                }
                event.result_category = category;
            }
        }
        event.result_short = Some(code);
        event.unmatched = false;
    }

    fn unmatched(&mut self, event: &mut AtBatEvent, warning: EngineWarning) {
        warn!("{}", warning);
        event.result_short = None;
        event.unmatched = true;
        self.warnings.push(warning);
    }

    /// Warnings collected so far, plus leftover codes when enabled.
    ///
    /// Leftovers are reported by player name so the output is stable.
    pub fn finish(self) -> Vec<EngineWarning> {
        let mut warnings = self.warnings;
        if !self.options.report_unconsumed {
            return warnings;
        }

        let mut leftovers: Vec<(&String, &BoxScorePlayerQueue)> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_exhausted())
            .collect();
        leftovers.sort_by(|a, b| a.0.cmp(b.0));

        for (player, queue) in leftovers {
            let warning = EngineWarning::UnconsumedCodes {
                player: player.clone(),
                remaining: queue.remaining().map(str::to_string).collect(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }
        warnings
    }
}

impl Transform for ShortCodeAssigner {
    fn transform(&mut self, events: &mut Vec<AtBatEvent>) {
        for event in events.iter_mut() {
            self.assign(event);
        }
    }
}

/// Reconstructs one game from its live text and box score.
///
/// # Example
///
/// ```
/// use pbp_ledger::event::{BoxScoreRow, GameInput, Half, RawFragment};
/// use pbp_ledger::reconciler::EventReconciler;
///
/// let input = GameInput {
///     game_id: None,
///     fragments: vec![RawFragment::new(1, Half::Top, "陳傑憲：擊出一壘安打")],
///     box_score: vec![BoxScoreRow::new("陳傑憲", "Lions", &["一安"])],
/// };
/// let result = EventReconciler::new().reconstruct(&input);
/// assert!(result.is_clean());
/// assert_eq!(result.log.events[0].result_short.as_deref(), Some("一安"));
/// ```
pub struct EventReconciler {
    classifier: TextEventClassifier,
    options: EngineConfig,
    post: TransformChain,
}

impl EventReconciler {
    /// Reconciler with built-in rules and default options.
    pub fn new() -> Self {
        Self::with_parts(TextEventClassifier::default(), EngineConfig::default())
    }

    /// Reconciler using the rules and engine options of a config.
    pub fn from_config(config: &Config) -> Self {
        Self::with_parts(
            TextEventClassifier::new(ClassifierRules::from_config(&config.rules)),
            config.engine.clone(),
        )
    }

    pub fn with_parts(classifier: TextEventClassifier, options: EngineConfig) -> Self {
        Self {
            classifier,
            options,
            post: TransformChain::new(),
        }
    }

    /// Append a stage that runs on the finished ledger.
    pub fn with_stage<T: Transform + Send + 'static>(mut self, stage: T) -> Self {
        self.post = self.post.with(stage);
        self
    }

    pub fn classifier(&self) -> &TextEventClassifier {
        &self.classifier
    }

    /// Build the ledger for one game.
    pub fn reconstruct(&mut self, input: &GameInput) -> Reconstruction {
        let (mut events, skipped) = self.classifier.classify_all(&input.fragments);
        let mut warnings: Vec<EngineWarning> = skipped.into_iter().map(Into::into).collect();

        let roster = input
            .box_score
            .iter()
            .map(|row| row.player_name.trim().to_string());
        RunnerStateMachine::with_roster(roster).transform(&mut events);

        let queues = BoxScoreSequenceExtractor::extract(&input.box_score);
        let mut assigner = ShortCodeAssigner::new(queues, self.options.clone());
        assigner.transform(&mut events);
        warnings.extend(assigner.finish());

        self.post.transform(&mut events);

        info!(
            game = input.game_id.as_deref().unwrap_or("-"),
            fragments = input.fragments.len(),
            events = events.len(),
            warnings = warnings.len(),
            "Reconstructed game"
        );

        Reconstruction {
            log: GameEventLog {
                game_id: input.game_id.clone(),
                events,
            },
            warnings,
        }
    }
}

impl Default for EventReconciler {
    fn default() -> Self {
        Self::new()
    }
}
