//! Pattern tables for runner and hitter movement.
//!
//! Movement is read from commentary phrases, never from the result
//! category. Each table is an ordered list of compiled matchers paired with
//! the structural effect they produce; new phrasings are added as rows.

use std::sync::OnceLock;

use regex::Regex;

use super::bases::Base;
use crate::text::{clauses, parse_count};

/// What happens to a runner already on base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEffect {
    /// Retired on the bases
    Out,
    /// Crossed home plate
    Scores,
    /// Moved to a named base
    AdvanceTo(Base),
    /// Moved up one base without the destination being named
    AdvanceOne,
}

/// One runner-movement phrase found in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerMovement {
    pub from: Base,
    pub effect: RunnerEffect,
}

/// Where the hitter ends up after a completed plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitterOutcome {
    Reaches(Base),
    /// Home run or any play that explicitly scores the hitter
    Scores,
    /// Retired, or the text does not say
    Stays,
}

#[derive(Debug, Clone, Copy)]
enum EffectKind {
    Out,
    Scores,
    AdvanceTo,
    AdvanceOne,
}

const RUNNER_TABLE: &[(&str, EffectKind)] = &[
    (r"出局|封殺|觸殺|刺殺|夾殺|阻殺|盜壘失敗|被牽制", EffectKind::Out),
    (r"跑回本壘|回到本壘|回本壘|踩上本壘|得分", EffectKind::Scores),
    (
        r"(?:上|進佔|推進到|推進至|前進到|跑到|進到|到達)\s*(?P<to>[二三])壘",
        EffectKind::AdvanceTo,
    ),
    (r"盜壘成功|推進一個壘包|多推進一個壘包", EffectKind::AdvanceOne),
];

/// Hit types that put the hitter on a base, tested in order.
const HIT_TABLE: &[(&str, Base)] = &[
    ("三壘安打", Base::Third),
    ("二壘安打", Base::Second),
    ("一壘安打", Base::First),
    ("內野安打", Base::First),
    ("安打", Base::First),
    ("四壞", Base::First),
    ("保送", Base::First),
    ("觸身", Base::First),
    ("野手選擇", Base::First),
    ("野選", Base::First),
    ("不死三振", Base::First),
];

fn mention_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?P<from>[一二三])壘跑者").expect("valid regex"))
}

fn runner_table() -> &'static [(Regex, EffectKind)] {
    static TABLE: OnceLock<Vec<(Regex, EffectKind)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        RUNNER_TABLE
            .iter()
            .map(|(pattern, kind)| (Regex::new(pattern).expect("valid regex"), *kind))
            .collect()
    })
}

fn hitter_advance_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:上|進佔|推進到|推進至|前進到|跑到|進到|到達)\s*(?P<to>[二三])壘")
            .expect("valid regex")
    })
}

fn hitter_scores_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"跑回本壘|回到本壘|回本壘|得分").expect("valid regex"))
}

fn outs_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?P<n>無|[0-9０-９]|[一二兩三])\s*人出局").expect("valid regex")
    })
}

/// Running out count stated in the text ("2人出局", "兩人出局").
///
/// The last marker wins. Returns `None` when the text states no count.
pub fn outs_after(description: &str) -> Option<u32> {
    outs_pattern()
        .captures_iter(description)
        .filter_map(|c| {
            let n = c.name("n")?.as_str();
            if n == "無" {
                Some(0)
            } else {
                parse_count(n)
            }
        })
        .last()
}

/// Every runner-movement phrase in the description, in text order.
///
/// Each "X壘跑者" mention owns the text up to the next mention or the end
/// of its clause. Mentions whose text matches no rule are left out.
pub fn runner_movements(description: &str) -> Vec<RunnerMovement> {
    let mut movements = Vec::new();

    for clause in clauses(description) {
        let mentions: Vec<(usize, usize, Base)> = mention_pattern()
            .captures_iter(clause)
            .filter_map(|c| {
                let whole = c.get(0)?;
                let from = Base::from_numeral(c.name("from")?.as_str())?;
                Some((whole.start(), whole.end(), from))
            })
            .collect();

        for (i, (_, end, from)) in mentions.iter().enumerate() {
            let stop = mentions.get(i + 1).map(|m| m.0).unwrap_or(clause.len());
            let tail = &clause[*end..stop];
            if let Some(effect) = match_runner_effect(tail) {
                movements.push(RunnerMovement {
                    from: *from,
                    effect,
                });
            }
        }
    }

    movements
}

fn match_runner_effect(tail: &str) -> Option<RunnerEffect> {
    for (pattern, kind) in runner_table() {
        let Some(caps) = pattern.captures(tail) else {
            continue;
        };
        let effect = match kind {
            EffectKind::Out => RunnerEffect::Out,
            EffectKind::Scores => RunnerEffect::Scores,
            EffectKind::AdvanceOne => RunnerEffect::AdvanceOne,
            EffectKind::AdvanceTo => {
                let to = caps.name("to").and_then(|m| Base::from_numeral(m.as_str()))?;
                RunnerEffect::AdvanceTo(to)
            }
        };
        return Some(effect);
    }
    None
}

/// Where the hitter lands.
///
/// Error phrasing is checked first: the hitter reaches the base named by an
/// advance marker in the error clause (or in a clause about the hitter),
/// first base by default. Otherwise hit-type keywords decide.
pub fn hitter_outcome(description: &str) -> HitterOutcome {
    let batter_clauses: Vec<&str> = clauses(description)
        .filter(|c| {
            // "打者跑者" is the batter; "二壘跑者" etc. are runner clauses
            !mention_pattern().is_match(c) && (!c.contains("跑者") || c.contains("打者"))
        })
        .collect();

    if let Some(error_clause) = batter_clauses.iter().find(|c| c.contains("失誤")) {
        let phrasing: Vec<&str> = std::iter::once(*error_clause)
            .chain(batter_clauses.iter().copied().filter(|c| c.contains("打者")))
            .collect();
        if phrasing.iter().any(|c| hitter_scores_pattern().is_match(c)) {
            return HitterOutcome::Scores;
        }
        let marker = phrasing
            .iter()
            .find_map(|c| hitter_advance_pattern().captures(c))
            .and_then(|caps| caps.name("to").and_then(|m| Base::from_numeral(m.as_str())));
        return HitterOutcome::Reaches(marker.unwrap_or(Base::First));
    }

    if description.contains("全壘打") {
        return HitterOutcome::Scores;
    }
    if batter_clauses
        .iter()
        .any(|c| c.contains("打者") && hitter_scores_pattern().is_match(c))
    {
        return HitterOutcome::Scores;
    }

    HIT_TABLE
        .iter()
        .find(|(keyword, _)| description.contains(keyword))
        .map(|(_, base)| HitterOutcome::Reaches(*base))
        .unwrap_or(HitterOutcome::Stays)
}
