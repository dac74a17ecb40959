//! Per-player plate-appearance queues built from box-score rows.
//!
//! The box score lists, for every rostered player, one short result code per
//! official plate appearance ("一安", "三振", "游滾"...). The reconciler
//! consumes each player's codes front to back as it walks the ledger.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use crate::event::{BoxScoreRow, ResultCategory};

/// Ordered short result codes for one player, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxScorePlayerQueue {
    team_name: String,
    codes: VecDeque<String>,
    consumed: usize,
}

impl BoxScorePlayerQueue {
    pub fn new<I, S>(team_name: &str, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            team_name: team_name.to_string(),
            codes: codes.into_iter().map(Into::into).collect(),
            consumed: 0,
        }
    }

    /// Take the next code. `None` once every code has been consumed.
    pub fn pop_front(&mut self) -> Option<String> {
        let code = self.codes.pop_front()?;
        self.consumed += 1;
        Some(code)
    }

    pub fn peek(&self) -> Option<&str> {
        self.codes.front().map(String::as_str)
    }

    /// Codes not yet consumed, in order.
    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn remaining_len(&self) -> usize {
        self.codes.len()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_exhausted(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }
}

/// Builds one queue per player from the box-score rows.
pub struct BoxScoreSequenceExtractor;

impl BoxScoreSequenceExtractor {
    /// One queue per player name.
    ///
    /// Names are assumed unique within a game. A repeated name keeps the
    /// first row and logs the duplicate.
    pub fn extract(rows: &[BoxScoreRow]) -> HashMap<String, BoxScorePlayerQueue> {
        let mut queues = HashMap::with_capacity(rows.len());

        for row in rows {
            let name = row.player_name.trim();
            if name.is_empty() {
                debug!(team = %row.team_name, "Box score row without a player name");
                continue;
            }
            if queues.contains_key(name) {
                warn!(player = %name, team = %row.team_name, "Duplicate box score row ignored");
                continue;
            }

            let codes = row
                .results
                .iter()
                .map(|code| code.trim())
                .filter(|code| !code.is_empty());
            queues.insert(
                name.to_string(),
                BoxScorePlayerQueue::new(&row.team_name, codes),
            );
        }

        queues
    }
}

/// Short-code fragments, tested in order; first hit decides.
const CODE_TABLE: &[(ResultCategory, &[&str])] = &[
    (ResultCategory::Sacrifice, &["犧"]),
    (ResultCategory::FieldersChoice, &["野選"]),
    (ResultCategory::Error, &["失"]),
    (
        ResultCategory::OnBase,
        &["安", "全打", "全壘打", "四壞", "保送", "故四", "觸身"],
    ),
    (ResultCategory::Out, &["振", "飛", "滾", "直", "殺", "邪"]),
];

/// Category implied by a box-score short code, if any.
pub fn category_for_code(code: &str) -> Option<ResultCategory> {
    CODE_TABLE
        .iter()
        .find(|(_, fragments)| fragments.iter().any(|f| code.contains(f)))
        .map(|(category, _)| *category)
}
