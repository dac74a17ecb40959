//! Shared data model for game reconstruction.
//!
//! These types describe the two collaborator-supplied inputs (live-text
//! fragments and box-score rows) and the one output shape (the
//! [`GameEventLog`]). An [`AtBatEvent`] is created partially by the
//! classifier and then enriched in place by the runner state machine and
//! the reconciler.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which team is batting within an inning.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    #[default]
    Top,
    Bottom,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Top => write!(f, "top"),
            Half::Bottom => write!(f, "bottom"),
        }
    }
}

/// Coarse outcome of a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCategory {
    OnBase,
    Out,
    Sacrifice,
    FieldersChoice,
    Error,
    Unspecified,
}

impl ResultCategory {
    /// Short uppercase label used in table output.
    pub fn label(&self) -> &'static str {
        match self {
            ResultCategory::OnBase => "ON_BASE",
            ResultCategory::Out => "OUT",
            ResultCategory::Sacrifice => "SACRIFICE",
            ResultCategory::FieldersChoice => "FIELDERS_CHOICE",
            ResultCategory::Error => "ERROR",
            ResultCategory::Unspecified => "UNSPECIFIED",
        }
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One pitch of a plate appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    /// 1-based pitch number within the plate appearance
    pub number: u32,
    /// Umpire call or contact description ("好球", "界外", ...)
    pub call: String,
    /// Running ball-strike count after the pitch, e.g. "1-2"
    pub count: Option<String>,
}

/// One play, progressively enriched through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtBatEvent {
    pub inning: u32,
    pub half: Half,
    pub hitter_name: String,
    /// Raw commentary text for the play
    pub description: String,
    pub result_category: ResultCategory,
    pub runs_scored_on_play: u32,
    pub opposing_pitcher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pitch_sequence: Vec<Pitch>,

    /// Outs before the play (set by the runner state machine)
    pub outs_before: Option<u8>,
    /// Base occupancy before the play (set by the runner state machine)
    pub runners_before_description: Option<String>,
    /// Per-hitter plate appearance counter, formal plate appearances only
    pub sequence_in_game: Option<u32>,

    /// Canonical box-score code (set by the reconciler)
    pub result_short: Option<String>,
    pub is_formal_plate_appearance: bool,
    /// Formal plate appearance that found no box-score code
    #[serde(default)]
    pub unmatched: bool,
}

impl AtBatEvent {
    /// Create a classified but unenriched event.
    pub fn new(inning: u32, half: Half, hitter_name: &str, description: &str) -> Self {
        Self {
            inning,
            half,
            hitter_name: hitter_name.to_string(),
            description: description.to_string(),
            result_category: ResultCategory::Unspecified,
            runs_scored_on_play: 0,
            opposing_pitcher_name: None,
            pitch_sequence: Vec::new(),
            outs_before: None,
            runners_before_description: None,
            sequence_in_game: None,
            result_short: None,
            is_formal_plate_appearance: true,
            unmatched: false,
        }
    }

    /// Key of the half-inning this event belongs to.
    pub fn half_inning(&self) -> (u32, Half) {
        (self.inning, self.half)
    }
}

/// One commentary item as extracted from the live-text page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFragment {
    /// Commentary text, usually "<hitter>：<description>"
    pub text: String,
    pub inning: u32,
    pub half: Half,
    /// Explicit hitter name; when absent it is read from `text`
    #[serde(default)]
    pub hitter: Option<String>,
    /// Pitcher sub-fragment, e.g. "投手：潘威倫"
    #[serde(default)]
    pub pitcher: Option<String>,
    /// Pitch detail sub-fragments, e.g. "第1球 好球 0-1"
    #[serde(default)]
    pub pitches: Vec<String>,
}

impl RawFragment {
    /// Fragment whose hitter is embedded in the text.
    pub fn new(inning: u32, half: Half, text: &str) -> Self {
        Self {
            text: text.to_string(),
            inning,
            half,
            ..Default::default()
        }
    }

    /// Fragment with an explicit hitter name.
    pub fn with_hitter(inning: u32, half: Half, hitter: &str, text: &str) -> Self {
        Self {
            hitter: Some(hitter.to_string()),
            ..Self::new(inning, half, text)
        }
    }
}

/// One player's row from the box score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxScoreRow {
    pub player_name: String,
    #[serde(default)]
    pub team_name: String,
    /// Short result codes in plate-appearance order ("一安", "三振", ...)
    #[serde(default)]
    pub results: Vec<String>,
}

impl BoxScoreRow {
    pub fn new(player_name: &str, team_name: &str, results: &[&str]) -> Self {
        Self {
            player_name: player_name.to_string(),
            team_name: team_name.to_string(),
            results: results.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Everything needed to reconstruct one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInput {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub fragments: Vec<RawFragment>,
    #[serde(default)]
    pub box_score: Vec<BoxScoreRow>,
}

/// The final chronological ledger of plays for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEventLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    pub events: Vec<AtBatEvent>,
}

impl GameEventLog {
    /// Events belonging to one half-inning, in order.
    pub fn half_inning(&self, inning: u32, half: Half) -> impl Iterator<Item = &AtBatEvent> {
        self.events
            .iter()
            .filter(move |e| e.inning == inning && e.half == half)
    }

    /// Events for one hitter, in order.
    pub fn for_hitter<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AtBatEvent> + 'a {
        self.events.iter().filter(move |e| e.hitter_name == name)
    }

    /// Number of formal plate appearances in the log.
    pub fn plate_appearances(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.is_formal_plate_appearance)
            .count()
    }

    /// Number of formal plate appearances left without a box-score code.
    pub fn unmatched_count(&self) -> usize {
        self.events.iter().filter(|e| e.unmatched).count()
    }
}
