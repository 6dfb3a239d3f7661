//! Seek, flee and arrive: the single-target dynamic primitives.

use ai_core::{Kinematic, Real, SteeringOutput, Vector3};

use crate::SteeringBehavior;

/// Full acceleration along `direction`, or zero if there is no direction.
#[inline]
fn full_thrust(direction: Vector3, max_acceleration: Real) -> SteeringOutput {
    SteeringOutput::new(direction.unit() * max_acceleration, 0.0)
}

// ── Seek ──────────────────────────────────────────────────────────────────────

/// Accelerate at full power toward a fixed point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Seek {
    pub target: Vector3,
    pub max_acceleration: Real,
}

impl Seek {
    pub fn new(target: Vector3, max_acceleration: Real) -> Self {
        Self { target, max_acceleration }
    }

    /// Seek output for an explicit target, without mutating `self.target`.
    pub fn toward(&self, character: &Kinematic, target: Vector3) -> SteeringOutput {
        full_thrust(target - character.position, self.max_acceleration)
    }
}

impl SteeringBehavior for Seek {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        self.toward(character, self.target)
    }
}

// ── Flee ──────────────────────────────────────────────────────────────────────

/// Accelerate at full power directly away from a fixed point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flee {
    pub target: Vector3,
    pub max_acceleration: Real,
}

impl Flee {
    pub fn new(target: Vector3, max_acceleration: Real) -> Self {
        Self { target, max_acceleration }
    }
}

impl SteeringBehavior for Flee {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        full_thrust(character.position - self.target, self.max_acceleration)
    }
}

// ── Arrive ────────────────────────────────────────────────────────────────────

/// Seek that brakes inside `slow_radius` and stops inside `target_radius`.
///
/// The desired velocity shrinks linearly with distance inside the slowing
/// zone; the returned acceleration closes the gap to it over
/// `time_to_target` seconds, capped at `max_acceleration`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrive {
    pub target: Vector3,
    pub max_acceleration: Real,
    pub max_speed: Real,
    /// Within this distance the character counts as arrived.
    pub target_radius: Real,
    /// Within this distance the desired speed starts dropping.
    pub slow_radius: Real,
    pub time_to_target: Real,
}

impl Default for Arrive {
    fn default() -> Self {
        Self {
            target:           Vector3::ZERO,
            max_acceleration: 1.0,
            max_speed:        1.0,
            target_radius:    0.1,
            slow_radius:      1.0,
            time_to_target:   0.1,
        }
    }
}

impl SteeringBehavior for Arrive {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        let direction = self.target - character.position;
        let distance = direction.magnitude();
        if distance < self.target_radius {
            return SteeringOutput::ZERO;
        }

        let target_speed = if distance > self.slow_radius || self.slow_radius <= 0.0 {
            self.max_speed
        } else {
            self.max_speed * distance / self.slow_radius
        };
        let target_velocity = direction.unit() * target_speed;

        let mut linear = target_velocity - character.velocity;
        if self.time_to_target > 0.0 {
            linear *= 1.0 / self.time_to_target;
        }
        if linear.square_magnitude() > self.max_acceleration * self.max_acceleration {
            linear = linear.unit() * self.max_acceleration;
        }
        SteeringOutput::new(linear, 0.0)
    }
}
