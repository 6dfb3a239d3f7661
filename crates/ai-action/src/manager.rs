//! The `ActionManager` and its per-tick execute loop.

use ai_core::{ActionId, Real};
use tracing::{debug, trace};

use crate::{Action, ActionError, ActionObserver, ActionQueue, ActionResult, NoopObserver, Scheduled};

/// Schedules actions by priority and runs the compatible ones together.
///
/// # Per-tick loop
///
/// ```text
/// execute():
///   ① Interrupt — scan the queue from the top while priority >= active
///                 priority; the first action that can interrupt replaces
///                 the entire active set (old members are dropped).
///   ② Admit     — move every queued action that is compatible, in both
///                 directions, with every active action into the active set.
///   ③ Run       — act() each active action; drop those now complete.
/// ```
///
/// The active priority is the highest priority in the active set: an
/// interrupt sets it, each admission can only raise it, and it returns to
/// `0.0` when the active set drains.
pub struct ActionManager {
    queue:           ActionQueue,
    active:          Vec<Scheduled>,
    active_priority: Real,
    next_id:         u64,
}

impl Default for ActionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionManager {
    pub fn new() -> Self {
        Self {
            queue:           ActionQueue::new(),
            active:          Vec::new(),
            active_priority: 0.0,
            next_id:         0,
        }
    }

    /// Hand `action` to the manager.  It waits in the queue until the next
    /// [`execute`](Self::execute) can interrupt with or admit it.
    pub fn schedule<A: Action + 'static>(&mut self, action: A) -> ActionResult<ActionId> {
        self.schedule_boxed(Box::new(action))
    }

    pub fn schedule_boxed(&mut self, action: Box<dyn Action>) -> ActionResult<ActionId> {
        let priority = action.priority();
        if priority.is_nan() {
            return Err(ActionError::InvalidPriority(priority));
        }
        let id = ActionId(self.next_id);
        self.next_id += 1;
        self.queue.push(Scheduled::new(id, action));
        trace!(%id, priority, "action scheduled");
        Ok(id)
    }

    /// Run one tick without observation.
    pub fn execute(&mut self) {
        self.execute_observed(&mut NoopObserver);
    }

    /// Run one tick, reporting state changes to `observer`.
    pub fn execute_observed<O: ActionObserver>(&mut self, observer: &mut O) {
        self.check_interrupts(observer);
        self.admit_compatible(observer);
        self.run_active(observer);
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn check_interrupts<O: ActionObserver>(&mut self, observer: &mut O) {
        let mut interrupter = None;
        for (index, entry) in self.queue.iter().enumerate() {
            if entry.priority < self.active_priority {
                break;
            }
            if entry.action.can_interrupt() {
                interrupter = Some(index);
                break;
            }
        }

        let Some(entry) = interrupter.and_then(|index| self.queue.remove(index)) else {
            return;
        };
        for superseded in self.active.drain(..) {
            debug!(id = %superseded.id, by = %entry.id, "action superseded");
            observer.on_superseded(superseded.id);
        }
        debug!(id = %entry.id, priority = entry.priority, "action interrupted active set");
        observer.on_interrupt(entry.id, entry.priority);
        self.active_priority = entry.priority;
        self.active.push(entry);
    }

    fn admit_compatible<O: ActionObserver>(&mut self, observer: &mut O) {
        let mut index = 0;
        while let Some(candidate) = self.queue.get(index) {
            let compatible = self.active.iter().all(|running| {
                candidate.action.can_do_both(running.action.as_ref())
                    && running.action.can_do_both(candidate.action.as_ref())
            });
            if !compatible {
                index += 1;
                continue;
            }

            let Some(entry) = self.queue.remove(index) else {
                break;
            };
            self.active_priority = if self.active.is_empty() {
                entry.priority
            } else {
                self.active_priority.max(entry.priority)
            };
            debug!(id = %entry.id, priority = entry.priority, "action admitted");
            observer.on_admit(entry.id);
            self.active.push(entry);
        }
    }

    fn run_active<O: ActionObserver>(&mut self, observer: &mut O) {
        let mut index = 0;
        while index < self.active.len() {
            let entry = &mut self.active[index];
            entry.action.act();
            trace!(id = %entry.id, "action ticked");
            if entry.action.is_complete() {
                let done = self.active.remove(index);
                debug!(id = %done.id, "action complete");
                observer.on_complete(done.id);
            } else {
                index += 1;
            }
        }
        if self.active.is_empty() {
            self.active_priority = 0.0;
        }
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// Pending actions as `(id, priority)`, highest priority first.
    pub fn queued(&self) -> impl Iterator<Item = (ActionId, Real)> + '_ {
        self.queue.iter().map(|e| (e.id, e.priority))
    }

    /// Running actions as `(id, priority)`, in admission order.
    pub fn active(&self) -> impl Iterator<Item = (ActionId, Real)> + '_ {
        self.active.iter().map(|e| (e.id, e.priority))
    }

    pub fn active_priority(&self) -> Real {
        self.active_priority
    }

    pub fn is_queued(&self, id: ActionId) -> bool {
        self.queue.iter().any(|e| e.id == id)
    }

    pub fn is_active(&self, id: ActionId) -> bool {
        self.active.iter().any(|e| e.id == id)
    }

    /// `true` when nothing is queued or running.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.active.is_empty()
    }
}
