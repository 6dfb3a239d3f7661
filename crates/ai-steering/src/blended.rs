//! Weighted-average composition of steering behaviours.

use ai_core::{Kinematic, Real, SteeringOutput};

use crate::{SteeringBehavior, SteeringError, SteeringResult};

/// One entry of a [`BlendedSteering`] list.
pub struct WeightedBehavior {
    pub behavior: Box<dyn SteeringBehavior>,
    pub weight: Real,
}

/// Runs every listed behaviour against the same character and returns the
/// weight-normalised average of their outputs.
///
/// A list whose total weight is not positive (including an empty list)
/// returns zero rather than dividing by zero.
#[derive(Default)]
pub struct BlendedSteering {
    pub behaviours: Vec<WeightedBehavior>,
}

impl BlendedSteering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `behavior` with `weight`.  Weights must be finite and >= 0.
    pub fn push<B: SteeringBehavior + 'static>(&mut self, behavior: B, weight: Real) -> SteeringResult<()> {
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(SteeringError::InvalidWeight(weight));
        }
        self.behaviours.push(WeightedBehavior { behavior: Box::new(behavior), weight });
        Ok(())
    }

    /// Fluent variant of [`push`](Self::push).
    pub fn with<B: SteeringBehavior + 'static>(mut self, behavior: B, weight: Real) -> SteeringResult<Self> {
        self.push(behavior, weight)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.behaviours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviours.is_empty()
    }
}

impl SteeringBehavior for BlendedSteering {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        let mut accumulated = SteeringOutput::ZERO;
        let mut total_weight: Real = 0.0;

        for entry in &mut self.behaviours {
            let out = entry.behavior.steering(character);
            accumulated.linear += out.linear * entry.weight;
            accumulated.angular += out.angular * entry.weight;
            total_weight += entry.weight;
        }

        if total_weight <= 0.0 {
            return SteeringOutput::ZERO;
        }
        let inv = 1.0 / total_weight;
        SteeringOutput::new(accumulated.linear * inv, accumulated.angular * inv)
    }
}
