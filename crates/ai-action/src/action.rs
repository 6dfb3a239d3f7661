//! The `Action` trait.

use ai_core::Real;

/// A unit of schedulable work.
///
/// Higher priority means more important.  The defaults describe a one-shot
/// action that never interrupts and never shares the active set: it runs
/// `act` once and is then complete.
pub trait Action {
    fn priority(&self) -> Real;

    /// Whether this action may replace the whole active set when its
    /// priority reaches the active priority.
    fn can_interrupt(&self) -> bool {
        false
    }

    /// Whether this action can run at the same time as `other`.  The manager
    /// checks both directions before admitting an action.
    fn can_do_both(&self, _other: &dyn Action) -> bool {
        false
    }

    fn is_complete(&self) -> bool {
        true
    }

    /// Advance the action by one tick.
    fn act(&mut self) {}
}
