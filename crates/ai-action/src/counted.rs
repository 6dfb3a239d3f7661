//! A configurable action that completes after a fixed number of ticks.

use ai_core::Real;
use tracing::trace;

use crate::Action;

/// Completes after `ticks` calls to `act`.
///
/// `interrupts` controls [`Action::can_interrupt`]; `concurrent` makes the
/// action willing to share the active set with anything (the other side must
/// agree too).
#[derive(Clone, Debug, PartialEq)]
pub struct CountedAction {
    pub priority:   Real,
    pub interrupts: bool,
    pub concurrent: bool,
    remaining:      u32,
}

impl CountedAction {
    pub fn new(priority: Real, ticks: u32) -> Self {
        Self { priority, interrupts: false, concurrent: false, remaining: ticks }
    }

    /// A single-tick action.
    pub fn one_shot(priority: Real) -> Self {
        Self::new(priority, 1)
    }

    pub fn interrupting(mut self) -> Self {
        self.interrupts = true;
        self
    }

    pub fn concurrent(mut self) -> Self {
        self.concurrent = true;
        self
    }

    /// Ticks left before completion.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Action for CountedAction {
    fn priority(&self) -> Real {
        self.priority
    }

    fn can_interrupt(&self) -> bool {
        self.interrupts
    }

    fn can_do_both(&self, _other: &dyn Action) -> bool {
        self.concurrent
    }

    fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    fn act(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        trace!(priority = self.priority, remaining = self.remaining, "counted action ticked");
    }
}
