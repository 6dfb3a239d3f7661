//! The four roles a [`SteeringPipe`][crate::SteeringPipe] is assembled from.
//!
//! Every method receives the character (or a path carrying its snapshot)
//! explicitly, so components hold no reference back to the pipe.

use ai_core::{Kinematic, Real, SteeringOutput};

use crate::{Goal, Path, PipelineResult};

/// Proposes channels of the goal.  Targeters run in registration order and
/// the first one to claim a channel keeps it.
pub trait Targeter {
    fn goal(&mut self, character: &Kinematic) -> Goal;
}

/// Rewrites the accumulated goal, e.g. replacing a distant target by a
/// nearer sub-goal.  Decomposers run in registration order, each seeing the
/// previous one's output.
pub trait Decomposer {
    fn decompose(&mut self, character: &Kinematic, goal: Goal) -> Goal;
}

/// A rule that may veto a path and propose an alternative goal.
pub trait Constraint {
    /// How soon `path` violates this constraint: lower means sooner.
    ///
    /// Return `None` when there is no violation before `max_priority`.  The
    /// pipe ignores reports that are not strictly between `0.0` and
    /// `max_priority`, so implementations may use the bound to stop early.
    fn will_violate(&mut self, path: &dyn Path, max_priority: Real) -> Option<Real>;

    /// A goal that avoids the violation found by the most recent
    /// [`will_violate`](Constraint::will_violate) call on the same path.
    fn suggest(&mut self, path: &dyn Path) -> Goal;
}

/// Turns goals into paths and paths into steering.
pub trait Actuator {
    /// A fresh, empty path of the type this actuator works with.  Called once
    /// per actuator lifetime; the pipe reuses the path afterwards.
    fn create_path(&self) -> Box<dyn Path>;

    /// Re-plan `path` so it leads from `character` to `goal`.
    ///
    /// Returns [`PipelineError::PathMismatch`][crate::PipelineError::PathMismatch]
    /// if `path` was not created by this actuator.
    fn update_path(&mut self, path: &mut dyn Path, character: &Kinematic, goal: &Goal) -> PipelineResult<()>;

    /// The steering needed to follow `path`.
    fn steering(&mut self, path: &dyn Path) -> PipelineResult<SteeringOutput>;
}
