//! Wander: aimless but smooth dynamic movement.

use ai_core::{AiRng, Kinematic, Real, SteeringOutput, Vector3};

use crate::{Seek, SteeringBehavior};

/// Seeks a target that drifts around a circle centred on the character.
///
/// Each call re-projects the previous target onto a circle of radius
/// `volatility` in the XZ plane, nudges it by a binomial jitter of up to
/// `turn_speed` on each axis, then seeks it.  Larger `volatility` relative to
/// `turn_speed` gives straighter paths.
///
/// Wander always produces a full-magnitude output, which makes it the usual
/// last entry of a [`PrioritySteering`][crate::PrioritySteering] list.
#[derive(Clone, Debug)]
pub struct Wander {
    pub volatility: Real,
    pub turn_speed: Real,
    pub max_acceleration: Real,
    target: Option<Vector3>,
    rng: AiRng,
}

impl Wander {
    pub fn new(volatility: Real, turn_speed: Real, max_acceleration: Real, rng: AiRng) -> Self {
        Self { volatility, turn_speed, max_acceleration, target: None, rng }
    }

    /// The point sought on the most recent call, if any.
    pub fn target(&self) -> Option<Vector3> {
        self.target
    }
}

impl SteeringBehavior for Wander {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        let position = character.position;
        let previous = self
            .target
            .unwrap_or(position + Vector3::new(self.volatility, 0.0, 0.0));

        let offset = previous - position;
        let angle = if offset.x * offset.x + offset.z * offset.z > 0.0 {
            offset.z.atan2(offset.x)
        } else {
            0.0
        };

        let mut target = position
            + Vector3::new(self.volatility * angle.cos(), 0.0, self.volatility * angle.sin());
        target.x += self.rng.random_binomial(self.turn_speed);
        target.z += self.rng.random_binomial(self.turn_speed);
        self.target = Some(target);

        Seek::new(target, self.max_acceleration).steering(character)
    }
}
