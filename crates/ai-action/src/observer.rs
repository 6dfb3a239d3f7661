//! Scheduler observer trait for diagnostics and bookkeeping.

use ai_core::{ActionId, Real};

/// Callbacks invoked by
/// [`ActionManager::execute_observed`][crate::ActionManager::execute_observed]
/// as actions change state.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — lifecycle printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl ActionObserver for Printer {
///     fn on_complete(&mut self, id: ActionId) {
///         println!("{id} finished");
///     }
/// }
/// ```
pub trait ActionObserver {
    /// `id` replaced the whole active set.  Called after the old members
    /// have been reported through [`on_superseded`](Self::on_superseded).
    fn on_interrupt(&mut self, _id: ActionId, _priority: Real) {}

    /// `id` was dropped from the active set by an interrupt, unfinished.
    fn on_superseded(&mut self, _id: ActionId) {}

    /// `id` moved from the queue into the active set alongside the actions
    /// already running.
    fn on_admit(&mut self, _id: ActionId) {}

    /// `id` reported completion after its tick and was dropped.
    fn on_complete(&mut self, _id: ActionId) {}
}

/// An [`ActionObserver`] that does nothing.
pub struct NoopObserver;

impl ActionObserver for NoopObserver {}
