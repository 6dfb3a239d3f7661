//! Actions built from other actions.
//!
//! Both compounds own their sub-actions; dropping a compound drops
//! everything it still holds.  A compound is compatible with another action
//! only if every sub-action it holds is.

use std::collections::VecDeque;

use ai_core::Real;

use crate::Action;

// ── ActionCombination ─────────────────────────────────────────────────────────

/// Runs all sub-actions every tick until all of them are complete.
///
/// Completed sub-actions are skipped but kept.  The combination can
/// interrupt if any sub-action can.
pub struct ActionCombination {
    pub priority: Real,
    actions:      Vec<Box<dyn Action>>,
}

impl ActionCombination {
    pub fn new(priority: Real) -> Self {
        Self { priority, actions: Vec::new() }
    }

    pub fn push<A: Action + 'static>(&mut self, action: A) {
        self.actions.push(Box::new(action));
    }

    /// Fluent variant of [`push`](Self::push).
    pub fn with<A: Action + 'static>(mut self, action: A) -> Self {
        self.push(action);
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Action for ActionCombination {
    fn priority(&self) -> Real {
        self.priority
    }

    fn can_interrupt(&self) -> bool {
        self.actions.iter().any(|a| a.can_interrupt())
    }

    fn can_do_both(&self, other: &dyn Action) -> bool {
        self.actions.iter().all(|a| a.can_do_both(other))
    }

    fn is_complete(&self) -> bool {
        self.actions.iter().all(|a| a.is_complete())
    }

    fn act(&mut self) {
        for action in self.actions.iter_mut().filter(|a| !a.is_complete()) {
            action.act();
        }
    }
}

// ── ActionSequence ────────────────────────────────────────────────────────────

/// Runs sub-actions one after another.
///
/// Only the head is ticked; once it completes it is dropped and the next one
/// runs on the following tick.  The sequence is complete when it is empty,
/// and can interrupt only if its current head can.
pub struct ActionSequence {
    pub priority: Real,
    actions:      VecDeque<Box<dyn Action>>,
}

impl ActionSequence {
    pub fn new(priority: Real) -> Self {
        Self { priority, actions: VecDeque::new() }
    }

    pub fn push<A: Action + 'static>(&mut self, action: A) {
        self.actions.push_back(Box::new(action));
    }

    /// Fluent variant of [`push`](Self::push).
    pub fn with<A: Action + 'static>(mut self, action: A) -> Self {
        self.push(action);
        self
    }

    /// Sub-actions not yet finished, including the head.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Action for ActionSequence {
    fn priority(&self) -> Real {
        self.priority
    }

    fn can_interrupt(&self) -> bool {
        self.actions.front().is_some_and(|head| head.can_interrupt())
    }

    fn can_do_both(&self, other: &dyn Action) -> bool {
        self.actions.iter().all(|a| a.can_do_both(other))
    }

    fn is_complete(&self) -> bool {
        self.actions.is_empty()
    }

    fn act(&mut self) {
        let Some(head) = self.actions.front_mut() else {
            return;
        };
        head.act();
        if head.is_complete() {
            self.actions.pop_front();
        }
    }
}
