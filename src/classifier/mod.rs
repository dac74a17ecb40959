//! Text event classification.
//!
//! [`TextEventClassifier`] turns one raw live-text fragment into a partially
//! populated [`AtBatEvent`]: hitter, description, opposing pitcher, pitch
//! sequence, runs scored on the play, a coarse [`ResultCategory`] and the
//! formal-plate-appearance flag. Base/out state and the canonical box-score
//! code are filled in later by the runner state machine and the reconciler.
//!
//! Classification is data driven: [`ClassifierRules`] holds ordered keyword
//! tables that can be extended from configuration without new code paths.

mod keywords;

pub use keywords::{CATEGORY_TABLE, NON_PLATE_APPEARANCE, PLATE_APPEARANCE_OUTCOME};

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::RulesConfig;
use crate::error::FragmentError;
use crate::event::{AtBatEvent, Pitch, RawFragment, ResultCategory};
use crate::text::{contains_any, parse_count};

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub category: ResultCategory,
    pub keywords: Vec<String>,
}

/// Keyword tables driving classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierRules {
    /// Evaluated top to bottom, first match wins
    pub categories: Vec<KeywordRule>,
    pub non_plate_appearance: Vec<String>,
    pub plate_appearance_outcome: Vec<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            categories: CATEGORY_TABLE
                .iter()
                .map(|(category, words)| KeywordRule {
                    category: *category,
                    keywords: to_strings(words),
                })
                .collect(),
            non_plate_appearance: to_strings(NON_PLATE_APPEARANCE),
            plate_appearance_outcome: to_strings(PLATE_APPEARANCE_OUTCOME),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl ClassifierRules {
    /// Built-in tables extended with the `[rules]` section of the config.
    ///
    /// Extra keywords are appended after the built-in ones of the same
    /// category; the category order itself never changes.
    pub fn from_config(extra: &RulesConfig) -> Self {
        let mut rules = Self::default();
        for rule in rules.categories.iter_mut() {
            let words = match rule.category {
                ResultCategory::Sacrifice => &extra.sacrifice,
                ResultCategory::FieldersChoice => &extra.fielders_choice,
                ResultCategory::Error => &extra.error,
                ResultCategory::OnBase => &extra.on_base,
                ResultCategory::Out => &extra.out,
                ResultCategory::Unspecified => continue,
            };
            rule.keywords.extend(words.iter().cloned());
        }
        rules
            .non_plate_appearance
            .extend(extra.non_plate_appearance.iter().cloned());
        rules
            .plate_appearance_outcome
            .extend(extra.plate_appearance_outcome.iter().cloned());
        rules
    }

    /// Coarse category of a play description.
    pub fn categorize(&self, description: &str) -> ResultCategory {
        self.categories
            .iter()
            .find(|rule| contains_any(description, &rule.keywords))
            .map(|rule| rule.category)
            .unwrap_or(ResultCategory::Unspecified)
    }

    /// Whether the description counts as a formal plate appearance.
    ///
    /// Non-formal only when a non-plate-appearance phrase is present and no
    /// plate-appearance outcome phrase is. Empty descriptions are formal.
    pub fn is_formal_plate_appearance(&self, description: &str) -> bool {
        if description.trim().is_empty() {
            return true;
        }
        !(contains_any(description, &self.non_plate_appearance)
            && !contains_any(description, &self.plate_appearance_outcome))
    }
}

/// Parses raw live-text fragments into classified events.
#[derive(Debug, Clone, Default)]
pub struct TextEventClassifier {
    rules: ClassifierRules,
}

impl TextEventClassifier {
    pub fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// Classify one fragment.
    ///
    /// Returns `Ok(None)` for blank filler fragments and an error when the
    /// hitter name or the description cannot be found.
    pub fn classify(
        &self,
        index: usize,
        fragment: &RawFragment,
    ) -> Result<Option<AtBatEvent>, FragmentError> {
        let text = fragment.text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let explicit = fragment
            .hitter
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty());
        let (hitter, description) = match explicit {
            Some(hitter) => (Some(hitter), text),
            None => match split_hitter(text) {
                // "更換投手：陳韻文", "代打：王柏融": the head is an announcement
                (Some(head), rest) if !self.rules.is_formal_plate_appearance(head) => {
                    let named = rest.trim();
                    (Some(if named.is_empty() { head } else { named }), text)
                }
                parts => parts,
            },
        };

        let hitter = hitter.ok_or(FragmentError::MissingHitter { index })?;
        let description = description.trim();
        if description.is_empty() {
            return Err(FragmentError::MissingDescription { index });
        }

        let mut event = AtBatEvent::new(fragment.inning, fragment.half, hitter, description);
        event.result_category = self.rules.categorize(description);
        event.runs_scored_on_play = runs_scored(description);
        event.is_formal_plate_appearance = self.rules.is_formal_plate_appearance(text);
        event.opposing_pitcher_name = fragment.pitcher.as_deref().and_then(parse_pitcher);
        event.pitch_sequence = fragment
            .pitches
            .iter()
            .filter(|p| !p.trim().is_empty())
            .enumerate()
            .map(|(i, p)| parse_pitch(i as u32 + 1, p))
            .collect();

        debug!(
            index,
            hitter = %event.hitter_name,
            category = %event.result_category,
            formal = event.is_formal_plate_appearance,
            runs = event.runs_scored_on_play,
            "Classified fragment"
        );
        Ok(Some(event))
    }

    /// Classify every fragment in order, dropping noise and malformed ones.
    ///
    /// Malformed fragments are logged and returned alongside the events so
    /// the caller can report them.
    pub fn classify_all(&self, fragments: &[RawFragment]) -> (Vec<AtBatEvent>, Vec<FragmentError>) {
        let mut events = Vec::with_capacity(fragments.len());
        let mut skipped = Vec::new();

        for (index, fragment) in fragments.iter().enumerate() {
            match self.classify(index, fragment) {
                Ok(Some(event)) => events.push(event),
                Ok(None) => {}
                Err(e) => {
                    warn!(inning = fragment.inning, half = %fragment.half, "Skipping {}", e);
                    skipped.push(e);
                }
            }
        }

        (events, skipped)
    }
}

fn batting_order_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^第\s*[0-9０-９一二三四五六七八九]+\s*棒\s*").expect("valid regex")
    })
}

fn runs_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:得到|攻下|攻進|得)\s*([0-9０-９]+|[一二兩三四五六七八九十]+)\s*分")
            .expect("valid regex")
    })
}

fn pitch_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^第?\s*(\d+)\s*球?\s*(.*?)\s*(\d+\s*-\s*\d+)?$").expect("valid regex")
    })
}

/// Split "<hitter>：<description>" into its parts.
///
/// A leading batting-order tag ("第3棒") is dropped from the hitter name.
fn split_hitter(text: &str) -> (Option<&str>, &str) {
    let Some(pos) = text.find(['：', ':']) else {
        return (None, text);
    };
    let sep_len = text[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
    let head = text[..pos].trim();
    let description = &text[pos + sep_len..];

    let head = match batting_order_prefix().find(head) {
        Some(m) => head[m.end()..].trim(),
        None => head,
    };
    if head.is_empty() {
        (None, description)
    } else {
        (Some(head), description)
    }
}

/// Runs scored on the play, from "得N分" phrasing. Defaults to zero.
pub fn runs_scored(description: &str) -> u32 {
    runs_pattern()
        .captures(description)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_count(m.as_str()))
        .unwrap_or(0)
}

/// Pitcher name from a sub-fragment such as "投手：潘威倫".
fn parse_pitcher(raw: &str) -> Option<String> {
    let name = raw
        .trim()
        .trim_start_matches("投手")
        .trim_start_matches(['：', ':', ' ', '\u{3000}'])
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// One pitch from a detail sub-fragment such as "第3球 好球 1-2".
///
/// Entries that do not follow the pattern keep their text as the call.
fn parse_pitch(position: u32, raw: &str) -> Pitch {
    let raw = raw.trim();
    if let Some(caps) = pitch_pattern().captures(raw) {
        let number = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(position);
        let call = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
        let count = caps
            .get(3)
            .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect());
        return Pitch {
            number,
            call: call.to_string(),
            count,
        };
    }
    Pitch {
        number: position,
        call: raw.to_string(),
        count: None,
    }
}
