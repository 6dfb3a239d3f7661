//! Actuator-specific plans for reaching a goal.

use std::any::Any;

use ai_core::{Kinematic, Real};

use crate::Goal;

/// How an actuator intends to reach a [`Goal`].
///
/// The pipe treats paths as opaque: it only asks for
/// [`max_priority`](Path::max_priority) and hands the path to constraints
/// and back to the actuator that created it.  Actuators recover their
/// concrete type through [`as_any_mut`](Path::as_any_mut).
pub trait Path: Any {
    /// The character snapshot the path was planned from.
    fn character(&self) -> &Kinematic;

    /// The goal the path leads to.
    fn goal(&self) -> &Goal;

    /// Upper bound on the violation priority a constraint may report.
    ///
    /// Defaults to the straight-line distance to the goal position, or `0.0`
    /// when the goal has no position (nothing can then be violated).
    fn max_priority(&self) -> Real {
        match self.goal().position {
            Some(target) => self.character().position.distance(target),
            None => 0.0,
        }
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The minimal path: a straight line from the character to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BasicPath {
    pub character: Kinematic,
    pub goal:      Goal,
}

impl Path for BasicPath {
    fn character(&self) -> &Kinematic {
        &self.character
    }

    fn goal(&self) -> &Goal {
        &self.goal
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
