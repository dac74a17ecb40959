//! Base occupancy and per-half-inning state.

use std::fmt;

/// One of the three bases a runner can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    /// Bases in the order runners are resolved: lead runner first.
    pub const DESCENDING: [Base; 3] = [Base::Third, Base::Second, Base::First];

    pub const ASCENDING: [Base; 3] = [Base::First, Base::Second, Base::Third];

    pub fn index(self) -> usize {
        match self {
            Base::First => 0,
            Base::Second => 1,
            Base::Third => 2,
        }
    }

    /// The base after this one; `None` means home plate.
    pub fn next(self) -> Option<Base> {
        match self {
            Base::First => Some(Base::Second),
            Base::Second => Some(Base::Third),
            Base::Third => None,
        }
    }

    /// Base named by a Chinese numeral ("一" → first).
    pub fn from_numeral(s: &str) -> Option<Base> {
        match s {
            "一" | "1" => Some(Base::First),
            "二" | "2" => Some(Base::Second),
            "三" | "3" => Some(Base::Third),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::First => "first",
            Base::Second => "second",
            Base::Third => "third",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three base slots, each empty or holding one runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bases {
    slots: [Option<String>; 3],
}

impl Bases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, base: Base) -> Option<&str> {
        self.slots[base.index()].as_deref()
    }

    pub fn is_occupied(&self, base: Base) -> bool {
        self.slots[base.index()].is_some()
    }

    /// Put a runner on a base, returning whoever was there.
    pub fn set(&mut self, base: Base, runner: impl Into<String>) -> Option<String> {
        self.slots[base.index()].replace(runner.into())
    }

    /// Remove and return the runner on a base.
    pub fn take(&mut self, base: Base) -> Option<String> {
        self.slots[base.index()].take()
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied bases, first to third.
    pub fn occupied(&self) -> Vec<Base> {
        Base::ASCENDING
            .into_iter()
            .filter(|b| self.is_occupied(*b))
            .collect()
    }

    /// Text summary: "bases empty" or e.g. "first/third base occupied".
    pub fn describe(&self) -> String {
        let occupied = self.occupied();
        if occupied.is_empty() {
            return "bases empty".to_string();
        }
        let names: Vec<&str> = occupied.iter().map(|b| b.name()).collect();
        format!("{} base occupied", names.join("/"))
    }

    /// Put `runner` on `base`, pushing any occupant ahead of it.
    ///
    /// Occupants cascade toward home; returns how many runners were pushed
    /// past third.
    pub fn force(&mut self, base: Option<Base>, runner: String) -> u32 {
        match base {
            None => 1,
            Some(b) => {
                let scored = match self.take(b) {
                    Some(occupant) => self.force(b.next(), occupant),
                    None => 0,
                };
                self.set(b, runner);
                scored
            }
        }
    }
}

/// Outs and base occupancy for the half-inning being walked.
///
/// Outs stay in `0..=3`. Once they reach 3 the next event of the same
/// half-inning starts from a cleared state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HalfInningState {
    pub outs: u8,
    pub bases: Bases,
}

impl HalfInningState {
    pub const MAX_OUTS: u8 = 3;

    pub fn is_over(&self) -> bool {
        self.outs >= Self::MAX_OUTS
    }

    /// Side change: no outs, nobody on.
    pub fn reset(&mut self) {
        self.outs = 0;
        self.bases.clear();
    }

    pub fn set_outs(&mut self, outs: u32) {
        self.outs = outs.min(Self::MAX_OUTS as u32) as u8;
    }
}
