//! Ready-made pipe components: a fixed targeter, a straight-line sub-goal
//! decomposer, sphere avoidance, and a seek-based actuator.

use std::rc::Rc;

use ai_core::{Kinematic, Real, Sphere, SteeringOutput, Vector3};
use ai_steering::{Seek, SteeringBehavior};

use crate::{Actuator, BasicPath, Constraint, Decomposer, Goal, Path, PipelineError, PipelineResult, Targeter};

// ── FixedGoalTargeter ─────────────────────────────────────────────────────────

/// Always proposes the same goal.  Update `goal` from outside to retarget.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedGoalTargeter {
    pub goal: Goal,
}

impl FixedGoalTargeter {
    pub fn new(goal: Goal) -> Self {
        Self { goal }
    }
}

impl Targeter for FixedGoalTargeter {
    fn goal(&mut self, _character: &Kinematic) -> Goal {
        self.goal
    }
}

// ── SubGoalDecomposer ─────────────────────────────────────────────────────────

/// Pulls a distant goal position in to at most `max_distance` from the
/// character, along the straight line toward it.  A non-positive
/// `max_distance` leaves goals untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubGoalDecomposer {
    pub max_distance: Real,
}

impl SubGoalDecomposer {
    pub fn new(max_distance: Real) -> Self {
        Self { max_distance }
    }
}

impl Decomposer for SubGoalDecomposer {
    fn decompose(&mut self, character: &Kinematic, mut goal: Goal) -> Goal {
        if let Some(target) = goal.position {
            let offset = target - character.position;
            if self.max_distance > 0.0 && offset.magnitude() > self.max_distance {
                goal.position = Some(character.position + offset.unit() * self.max_distance);
            }
        }
        goal
    }
}

// ── AvoidSpheresConstraint ────────────────────────────────────────────────────

/// Keeps the straight line to the goal at least `avoid_margin` clear of every
/// obstacle sphere.
///
/// The violation priority is the distance along the line to its closest
/// approach to an offending sphere; the soonest one wins.  The suggested goal
/// is the point on the margin sphere nearest that closest approach.
///
/// Obstacles are shared read-only, so several constraints (or characters) can
/// alias one list.
#[derive(Clone, Debug)]
pub struct AvoidSpheresConstraint {
    pub obstacles:    Rc<[Sphere]>,
    pub avoid_margin: Real,
    suggestion:       Goal,
}

impl AvoidSpheresConstraint {
    pub fn new(obstacles: impl Into<Rc<[Sphere]>>, avoid_margin: Real) -> Self {
        Self { obstacles: obstacles.into(), avoid_margin, suggestion: Goal::new() }
    }
}

impl Constraint for AvoidSpheresConstraint {
    fn will_violate(&mut self, path: &dyn Path, max_priority: Real) -> Option<Real> {
        let target = path.goal().position?;
        let origin = path.character().position;
        let direction = target - origin;
        if direction.square_magnitude() <= 0.0 {
            return None;
        }
        let heading = direction.unit();

        let mut soonest: Option<Real> = None;
        let mut bound = max_priority;
        for obstacle in self.obstacles.iter() {
            let to_obstacle = obstacle.position - origin;
            let along = to_obstacle.dot(heading);
            let miss_sq = to_obstacle.square_magnitude() - along * along;

            let clearance = obstacle.radius + self.avoid_margin;
            if miss_sq >= clearance * clearance || along <= 0.0 || along >= bound {
                continue;
            }

            let closest = origin + heading * along;
            let escape = escape_direction(closest - obstacle.position, heading);
            self.suggestion = Goal::new().with_position(obstacle.position + escape * clearance);
            bound = along;
            soonest = Some(along);
        }
        soonest
    }

    fn suggest(&mut self, _path: &dyn Path) -> Goal {
        self.suggestion
    }
}

/// Unit direction from an obstacle centre toward the escape point.  A path
/// through the exact centre has no preferred side; sidestep perpendicular to
/// the heading in the horizontal plane.
fn escape_direction(offset: Vector3, heading: Vector3) -> Vector3 {
    if offset.square_magnitude() > 0.0 {
        return offset.unit();
    }
    let side = heading.cross(Vector3::new(0.0, 1.0, 0.0));
    if side.square_magnitude() > 0.0 {
        side.unit()
    } else {
        Vector3::new(1.0, 0.0, 0.0)
    }
}

// ── BasicActuator ─────────────────────────────────────────────────────────────

/// Plans a straight [`BasicPath`] and seeks its goal position.  Goals without
/// a position produce zero steering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BasicActuator {
    pub max_acceleration: Real,
}

impl BasicActuator {
    pub fn new(max_acceleration: Real) -> Self {
        Self { max_acceleration }
    }
}

impl Actuator for BasicActuator {
    fn create_path(&self) -> Box<dyn Path> {
        Box::new(BasicPath::default())
    }

    fn update_path(&mut self, path: &mut dyn Path, character: &Kinematic, goal: &Goal) -> PipelineResult<()> {
        let path = path
            .as_any_mut()
            .downcast_mut::<BasicPath>()
            .ok_or(PipelineError::PathMismatch)?;
        path.character = *character;
        path.goal = *goal;
        Ok(())
    }

    fn steering(&mut self, path: &dyn Path) -> PipelineResult<SteeringOutput> {
        Ok(match path.goal().position {
            Some(target) => Seek::new(target, self.max_acceleration).steering(path.character()),
            None => SteeringOutput::ZERO,
        })
    }
}
