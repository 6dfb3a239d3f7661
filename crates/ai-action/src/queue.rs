//! `ActionQueue` — the pending side of the scheduler.
//!
//! Kept sorted by descending priority.  A new entry goes immediately before
//! the first entry with strictly lower priority, so equal priorities keep
//! their arrival order.  Queues stay short (a handful of pending actions per
//! character), so a `Vec` with linear insertion beats anything cleverer.

use ai_core::{ActionId, Real};

use crate::Action;

/// An action together with its scheduling identity.
///
/// `priority` is read once, when the action is scheduled.
pub struct Scheduled {
    pub id:       ActionId,
    pub priority: Real,
    pub action:   Box<dyn Action>,
}

impl Scheduled {
    pub fn new(id: ActionId, action: Box<dyn Action>) -> Self {
        Self { id, priority: action.priority(), action }
    }
}

/// Priority-ordered, arrival-stable queue of pending actions.
#[derive(Default)]
pub struct ActionQueue {
    entries: Vec<Scheduled>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` before the first entry of strictly lower priority.
    pub fn push(&mut self, entry: Scheduled) {
        let at = self
            .entries
            .iter()
            .position(|queued| entry.priority > queued.priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, entry);
    }

    /// Remove and return the entry at `index` (0 = highest priority).
    pub fn remove(&mut self, index: usize) -> Option<Scheduled> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Scheduled> {
        self.entries.get(index)
    }

    /// The highest-priority entry, if any.
    pub fn peek(&self) -> Option<&Scheduled> {
        self.entries.first()
    }

    /// Entries from highest to lowest priority.
    pub fn iter(&self) -> impl Iterator<Item = &Scheduled> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending action.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
