//! `ai-action` — priority scheduling of character actions.
//!
//! Actions wait in a priority queue until they can run.  Each tick the
//! [`ActionManager`] lets the most important interrupting action replace
//! whatever is running, admits every queued action that can run alongside the
//! current ones, and ticks the active set.
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`action`]   | `Action` trait                                   |
//! | [`compound`] | `ActionCombination`, `ActionSequence`            |
//! | [`counted`]  | `CountedAction`                                  |
//! | [`queue`]    | `ActionQueue`, `Scheduled`                       |
//! | [`manager`]  | `ActionManager`                                  |
//! | [`observer`] | `ActionObserver`, `NoopObserver`                 |
//! | [`error`]    | `ActionError`, `ActionResult`                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ai_action::{ActionManager, CountedAction};
//!
//! let mut manager = ActionManager::new();
//! manager.schedule(CountedAction::new(1.0, 10))?;
//! manager.schedule(CountedAction::one_shot(5.0).interrupting())?;
//! while !manager.is_idle() {
//!     manager.execute();
//! }
//! ```

pub mod action;
pub mod compound;
pub mod counted;
pub mod error;
pub mod manager;
pub mod observer;
pub mod queue;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use compound::{ActionCombination, ActionSequence};
pub use counted::CountedAction;
pub use error::{ActionError, ActionResult};
pub use manager::ActionManager;
pub use observer::{ActionObserver, NoopObserver};
pub use queue::{ActionQueue, Scheduled};
