//! In-place enrichment stages for the event ledger.
//!
//! This module provides the [`Transform`] trait and [`TransformChain`] for
//! stages that walk a `Vec<AtBatEvent>` in chronological order and mutate it
//! in place. The runner state machine and the box-score code assignment are
//! both stages; callers can append their own post-processing stages to a
//! reconciler.
//!
//! # Example
//!
//! ```
//! use pbp_ledger::event::{AtBatEvent, Half};
//! use pbp_ledger::pipeline::{FormalOnly, Transform, TransformChain};
//!
//! let mut pickoff = AtBatEvent::new(1, Half::Top, "X", "投手牽制一壘");
//! pickoff.is_formal_plate_appearance = false;
//! let mut events = vec![AtBatEvent::new(1, Half::Top, "X", "三振"), pickoff];
//!
//! let mut chain = TransformChain::new().with(FormalOnly);
//! chain.transform(&mut events);
//! assert_eq!(events.len(), 1);
//! ```

use crate::event::AtBatEvent;

/// A stage that modifies events in place.
///
/// Stages are infallible. A stage that meets data it cannot interpret
/// leaves that event unchanged (or records a warning of its own) and keeps
/// going, so one bad play never aborts a whole game.
pub trait Transform {
    /// Apply this stage to the event vector.
    fn transform(&mut self, events: &mut Vec<AtBatEvent>);
}

/// A chain of stages applied in sequence.
///
/// Each stage sees the result of the stages before it.
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform + Send>>,
}

impl TransformChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a stage to the end of the chain.
    pub fn with<T: Transform + Send + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TransformChain {
    fn transform(&mut self, events: &mut Vec<AtBatEvent>) {
        for transform in &mut self.transforms {
            transform.transform(events);
        }
    }
}

/// Drops events that are not formal plate appearances.
///
/// Useful for consumers that only persist plate-appearance rows.
pub struct FormalOnly;

impl Transform for FormalOnly {
    fn transform(&mut self, events: &mut Vec<AtBatEvent>) {
        events.retain(|e| e.is_formal_plate_appearance);
    }
}
