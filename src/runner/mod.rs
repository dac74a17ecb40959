//! Baserunner and outs state machine.
//!
//! [`RunnerStateMachine`] walks classified events in chronological order and
//! stamps each one with the situation that existed *before* the play: outs,
//! base occupancy and the hitter's running plate-appearance count. State is
//! kept per half-inning in a [`HalfInningState`] owned by the machine.
//!
//! # Per-event walk
//!
//! 1. Fetch (or create) the half-inning state; if the previous play made the
//!    third out, reset it (side change).
//! 2. Snapshot outs and bases onto the event.
//! 3. Formal plate appearances advance the hitter's game-wide counter.
//! 4. Post-play outs come from an explicit "N人出局" marker, if any.
//! 5. Runners already on base move first, lead runner first (third, second,
//!    first); then the hitter is placed according to the play.
//!
//! Phrases that match no rule leave the runner where it was.

mod bases;
mod movement;

pub use bases::{Base, Bases, HalfInningState};
pub use movement::{
    hitter_outcome, outs_after, runner_movements, HitterOutcome, RunnerEffect, RunnerMovement,
};

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::event::{AtBatEvent, Half};
use crate::pipeline::Transform;

/// Walks events and maintains outs, bases and plate-appearance counters.
#[derive(Debug, Default)]
pub struct RunnerStateMachine {
    states: BTreeMap<(u32, Half), HalfInningState>,
    appearances: HashMap<String, u32>,
}

impl RunnerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Machine with a counter for every rostered player.
    ///
    /// Hitters missing from the roster (late pinch hitters) get a counter
    /// the first time they appear.
    pub fn with_roster<I, S>(roster: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: BTreeMap::new(),
            appearances: roster.into_iter().map(|name| (name.into(), 0)).collect(),
        }
    }

    /// Final state of a half-inning, after the last play walked.
    pub fn state(&self, inning: u32, half: Half) -> Option<&HalfInningState> {
        self.states.get(&(inning, half))
    }

    /// Formal plate appearances counted so far for a hitter.
    pub fn appearances(&self, hitter: &str) -> u32 {
        self.appearances.get(hitter).copied().unwrap_or(0)
    }

    /// Walk every event in order.
    pub fn run(&mut self, events: &mut [AtBatEvent]) {
        for event in events.iter_mut() {
            self.advance(event);
        }
    }

    /// Stamp one event with the pre-play situation and apply its effects.
    pub fn advance(&mut self, event: &mut AtBatEvent) {
        let state = self.states.entry(event.half_inning()).or_default();
        if state.is_over() {
            trace!(inning = event.inning, half = %event.half, "Side change");
            state.reset();
        }

        event.outs_before = Some(state.outs);
        event.runners_before_description = Some(state.bases.describe());

        if event.is_formal_plate_appearance {
            let count = self
                .appearances
                .entry(event.hitter_name.clone())
                .or_insert(0);
            *count += 1;
            event.sequence_in_game = Some(*count);
        }

        if let Some(outs) = outs_after(&event.description) {
            state.set_outs(outs);
        }

        move_runners(&mut state.bases, &event.description);
        if event.is_formal_plate_appearance {
            place_hitter(&mut state.bases, &event.hitter_name, &event.description);
        }

        debug!(
            inning = event.inning,
            half = %event.half,
            hitter = %event.hitter_name,
            outs_before = ?event.outs_before,
            outs_after = state.outs,
            bases = %state.bases.describe(),
            "Advanced state"
        );
    }
}

impl Transform for RunnerStateMachine {
    fn transform(&mut self, events: &mut Vec<AtBatEvent>) {
        self.run(events);
    }
}

/// Phase one: runners already on base, lead runner first.
fn move_runners(bases: &mut Bases, description: &str) {
    let movements = runner_movements(description);
    if movements.is_empty() {
        return;
    }

    for base in Base::DESCENDING {
        let Some(movement) = movements.iter().find(|m| m.from == base) else {
            continue;
        };
        let Some(runner) = bases.take(base) else {
            trace!(%base, "Movement phrase for an empty base");
            continue;
        };

        let destination = match movement.effect {
            RunnerEffect::Out | RunnerEffect::Scores => {
                trace!(%base, runner = %runner, effect = ?movement.effect, "Runner leaves the bases");
                continue;
            }
            RunnerEffect::AdvanceTo(to) if to > base => Some(to),
            RunnerEffect::AdvanceTo(_) => {
                bases.set(base, runner);
                continue;
            }
            RunnerEffect::AdvanceOne => base.next(),
        };

        match destination {
            // Stole home
            None => trace!(%base, runner = %runner, "Runner scores"),
            Some(to) if bases.is_occupied(to) => {
                trace!(%base, %to, "Destination occupied, runner stays");
                bases.set(base, runner);
            }
            Some(to) => {
                bases.set(to, runner);
            }
        }
    }
}

/// Phase two: put the hitter on base according to the play.
fn place_hitter(bases: &mut Bases, hitter: &str, description: &str) {
    match hitter_outcome(description) {
        HitterOutcome::Reaches(landing) => {
            // Runners at or behind the landing base must end up ahead of the hitter
            let mut forced_home = 0;
            for base in Base::DESCENDING.into_iter().filter(|b| *b <= landing) {
                if let Some(runner) = bases.take(base) {
                    forced_home += bases.force(landing.next(), runner);
                }
            }
            if forced_home > 0 {
                trace!(forced_home, "Runners forced home");
            }
            bases.set(landing, hitter);
        }
        HitterOutcome::Scores => {
            if description.contains("全壘打") {
                bases.clear();
            }
        }
        HitterOutcome::Stays => {}
    }
}
