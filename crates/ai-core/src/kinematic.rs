//! Character state snapshots and Euler integration.
//!
//! # Movement models
//!
//! - **Kinematic movement** treats a [`SteeringOutput`] as a velocity and
//!   applies it straight to a [`Location`].
//! - **Dynamic (steering) movement** treats it as an acceleration and feeds it
//!   into a [`Kinematic`]'s velocity and rotation.
//!
//! Integration is a convenience for hosts: nothing in the toolkit requires it,
//! and a host with its own physics simply reads the steering output.

use std::f32::consts::TAU;

use crate::{Real, Vector3};

/// Wrap an orientation into `[0, 2π)`.
#[inline]
fn wrap_orientation(orientation: Real) -> Real {
    orientation.rem_euclid(TAU)
}

// ── SteeringOutput ────────────────────────────────────────────────────────────

/// A linear + angular correction requested by a behaviour.
///
/// Interpreted as an acceleration by dynamic behaviours and as a velocity by
/// kinematic ones.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringOutput {
    pub linear: Vector3,
    pub angular: Real,
}

impl SteeringOutput {
    pub const ZERO: SteeringOutput = SteeringOutput { linear: Vector3::ZERO, angular: 0.0 };

    #[inline]
    pub fn new(linear: Vector3, angular: Real) -> Self {
        Self { linear, angular }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = SteeringOutput::ZERO;
    }

    /// Combined squared size of both channels: `|linear|² + angular²`.
    #[inline]
    pub fn square_magnitude(&self) -> Real {
        self.linear.square_magnitude() + self.angular * self.angular
    }

    #[inline]
    pub fn magnitude(&self) -> Real {
        self.square_magnitude().sqrt()
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// Position and facing, without any motion.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub position: Vector3,
    /// Radians, `0` facing `+z`.
    pub orientation: Real,
}

impl Location {
    #[inline]
    pub fn new(position: Vector3, orientation: Real) -> Self {
        Self { position, orientation }
    }

    /// Apply `steer` as a velocity for `duration` seconds.
    pub fn integrate(&mut self, steer: &SteeringOutput, duration: Real) {
        self.position += steer.linear * duration;
        self.orientation = wrap_orientation(self.orientation + steer.angular * duration);
    }

    /// Face along `velocity` in the XZ plane.  Unchanged when `velocity` is zero.
    pub fn set_orientation_from_velocity(&mut self, velocity: Vector3) {
        if velocity.square_magnitude() > 0.0 {
            self.orientation = velocity.x.atan2(velocity.z);
        }
    }

    /// Unit facing vector `(sin o, 0, cos o)`.
    pub fn orientation_as_vector(&self) -> Vector3 {
        Vector3::new(self.orientation.sin(), 0.0, self.orientation.cos())
    }
}

// ── Kinematic ─────────────────────────────────────────────────────────────────

/// Full motion snapshot of a character: the input every steering behaviour reads.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematic {
    pub position: Vector3,
    /// Radians, `0` facing `+z`.
    pub orientation: Real,
    pub velocity: Vector3,
    /// Angular velocity in radians per second.
    pub rotation: Real,
}

impl Kinematic {
    /// A stationary character at `position`.
    #[inline]
    pub fn at(position: Vector3) -> Self {
        Self { position, ..Self::default() }
    }

    #[inline]
    pub fn new(position: Vector3, orientation: Real, velocity: Vector3, rotation: Real) -> Self {
        Self { position, orientation, velocity, rotation }
    }

    /// Position and facing only.
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.position, self.orientation)
    }

    /// Advance position and orientation by the current velocities.
    pub fn integrate(&mut self, duration: Real) {
        self.position += self.velocity * duration;
        self.orientation = wrap_orientation(self.orientation + self.rotation * duration);
    }

    /// Advance by the current velocities, then apply `steer` as an acceleration.
    pub fn integrate_steering(&mut self, steer: &SteeringOutput, duration: Real) {
        self.integrate(duration);
        self.accelerate(steer, duration);
    }

    /// As [`integrate_steering`](Self::integrate_steering), damping both
    /// velocities by `drag` per second first.
    ///
    /// Rotation is damped by the square of the linear drag factor.
    pub fn integrate_with_drag(&mut self, steer: &SteeringOutput, drag: Real, duration: Real) {
        self.integrate(duration);
        let drag = drag.powf(duration);
        self.velocity *= drag;
        self.rotation *= drag * drag;
        self.accelerate(steer, duration);
    }

    /// As [`integrate_with_drag`](Self::integrate_with_drag) with a separate
    /// drag factor for each linear axis and for rotation.
    pub fn integrate_with_drag_components(
        &mut self,
        steer: &SteeringOutput,
        drag: &SteeringOutput,
        duration: Real,
    ) {
        self.integrate(duration);
        self.velocity.x *= drag.linear.x.powf(duration);
        self.velocity.y *= drag.linear.y.powf(duration);
        self.velocity.z *= drag.linear.z.powf(duration);
        self.rotation *= drag.angular.powf(duration);
        self.accelerate(steer, duration);
    }

    /// Clip the linear speed to `max_speed`.
    pub fn trim_max_speed(&mut self, max_speed: Real) {
        if self.velocity.square_magnitude() > max_speed * max_speed {
            self.velocity = self.velocity.unit() * max_speed;
        }
    }

    /// Face along the current velocity.  Unchanged when stationary.
    pub fn set_orientation_from_velocity(&mut self) {
        if self.velocity.square_magnitude() > 0.0 {
            self.orientation = self.velocity.x.atan2(self.velocity.z);
        }
    }

    #[inline]
    fn accelerate(&mut self, steer: &SteeringOutput, duration: Real) {
        self.velocity += steer.linear * duration;
        self.rotation += steer.angular * duration;
    }
}

impl From<Location> for Kinematic {
    fn from(loc: Location) -> Self {
        Self { position: loc.position, orientation: loc.orientation, ..Self::default() }
    }
}
