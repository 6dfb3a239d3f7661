//! Single-sphere obstacle avoidance along the current velocity ray.

use ai_core::{Kinematic, Real, Sphere, SteeringOutput};

use crate::{Seek, SteeringBehavior};

/// Steers around one spherical obstacle lying ahead of the character.
///
/// Projects the obstacle centre onto the ray along the character's velocity.
/// If the ray passes within `radius + avoid_margin` of the centre, and the
/// closest approach is ahead but no further than `max_lookahead`, the
/// behaviour seeks the point on the margin sphere nearest that closest
/// approach.  Otherwise it returns zero, so it composes naturally under
/// [`PrioritySteering`][crate::PrioritySteering].
#[derive(Clone, Debug, PartialEq)]
pub struct AvoidSphere {
    pub obstacle: Sphere,
    pub avoid_margin: Real,
    pub max_lookahead: Real,
    pub max_acceleration: Real,
}

impl AvoidSphere {
    pub fn new(obstacle: Sphere, avoid_margin: Real, max_lookahead: Real, max_acceleration: Real) -> Self {
        Self { obstacle, avoid_margin, max_lookahead, max_acceleration }
    }
}

impl SteeringBehavior for AvoidSphere {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        if character.velocity.square_magnitude() <= 0.0 {
            return SteeringOutput::ZERO;
        }

        let heading = character.velocity.unit();
        let to_obstacle = self.obstacle.position - character.position;
        let along = to_obstacle.dot(heading);
        let miss_sq = to_obstacle.square_magnitude() - along * along;

        let clearance = self.obstacle.radius + self.avoid_margin;
        if miss_sq >= clearance * clearance {
            return SteeringOutput::ZERO;
        }
        if along <= 0.0 || along >= self.max_lookahead {
            return SteeringOutput::ZERO;
        }

        let closest = character.position + heading * along;
        let escape = self.obstacle.position + (closest - self.obstacle.position).unit() * clearance;
        Seek::new(escape, self.max_acceleration).steering(character)
    }
}
