//! Kinematic movement: behaviours that output velocities, not accelerations.
//!
//! These suit characters without inertia.  The host applies the output with
//! [`Location::integrate`], optionally followed by
//! [`Location::set_orientation_from_velocity`].

use ai_core::{AiRng, Location, Real, SteeringOutput, Vector3};

/// A behaviour producing a target velocity for a [`Location`].
pub trait KinematicMovement {
    fn steering(&mut self, character: &Location) -> SteeringOutput;
}

/// Move at `max_speed` straight toward `target`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KinematicSeek {
    pub target: Vector3,
    pub max_speed: Real,
}

impl KinematicMovement for KinematicSeek {
    fn steering(&mut self, character: &Location) -> SteeringOutput {
        SteeringOutput::new((self.target - character.position).unit() * self.max_speed, 0.0)
    }
}

/// Move at `max_speed` straight away from `target`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KinematicFlee {
    pub target: Vector3,
    pub max_speed: Real,
}

impl KinematicMovement for KinematicFlee {
    fn steering(&mut self, character: &Location) -> SteeringOutput {
        SteeringOutput::new((character.position - self.target).unit() * self.max_speed, 0.0)
    }
}

/// Move toward `target` so as to reach it in `time_to_target` seconds,
/// capped at `max_speed`, stopping once within `radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicArrive {
    pub target: Vector3,
    pub max_speed: Real,
    pub radius: Real,
    pub time_to_target: Real,
}

impl Default for KinematicArrive {
    fn default() -> Self {
        Self { target: Vector3::ZERO, max_speed: 1.0, radius: 0.1, time_to_target: 0.25 }
    }
}

impl KinematicMovement for KinematicArrive {
    fn steering(&mut self, character: &Location) -> SteeringOutput {
        let direction = self.target - character.position;
        if direction.square_magnitude() < self.radius * self.radius {
            return SteeringOutput::ZERO;
        }

        let mut velocity = direction;
        if self.time_to_target > 0.0 {
            velocity *= 1.0 / self.time_to_target;
        }
        if velocity.square_magnitude() > self.max_speed * self.max_speed {
            velocity = velocity.unit() * self.max_speed;
        }
        SteeringOutput::new(velocity, 0.0)
    }
}

/// Move forward at `max_speed` while turning by a random amount up to
/// `max_rotation` (binomially distributed, so small turns dominate).
#[derive(Clone, Debug)]
pub struct KinematicWander {
    pub max_speed: Real,
    pub max_rotation: Real,
    rng: AiRng,
}

impl KinematicWander {
    pub fn new(max_speed: Real, max_rotation: Real, rng: AiRng) -> Self {
        Self { max_speed, max_rotation, rng }
    }
}

impl KinematicMovement for KinematicWander {
    fn steering(&mut self, character: &Location) -> SteeringOutput {
        let linear = character.orientation_as_vector() * self.max_speed;
        let angular = self.rng.random_binomial(1.0) * self.max_rotation;
        SteeringOutput::new(linear, angular)
    }
}
