//! First-non-negligible-wins composition of steering behaviours.

use ai_core::{Kinematic, Real, SteeringOutput};
use tracing::trace;

use crate::{SteeringBehavior, SteeringError, SteeringResult};

/// Runs behaviours strictly in order and uses the first output whose combined
/// magnitude (linear and angular) exceeds `epsilon`.
///
/// If nothing clears the threshold, the output of the last behaviour is
/// returned as-is.  Put an "always steers" behaviour such as
/// [`Wander`][crate::Wander] last to guarantee movement.
pub struct PrioritySteering {
    pub behaviours: Vec<Box<dyn SteeringBehavior>>,
    pub epsilon: Real,
    last_used: Option<usize>,
}

impl PrioritySteering {
    /// Create an empty list.  `epsilon` must be finite and >= 0.
    pub fn new(epsilon: Real) -> SteeringResult<Self> {
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            return Err(SteeringError::Config(format!(
                "priority epsilon must be finite and >= 0, got {epsilon}"
            )));
        }
        Ok(Self { behaviours: Vec::new(), epsilon, last_used: None })
    }

    /// Append the next-lowest-priority behaviour.
    pub fn push<B: SteeringBehavior + 'static>(&mut self, behavior: B) {
        self.behaviours.push(Box::new(behavior));
    }

    /// Fluent variant of [`push`](Self::push).
    pub fn with<B: SteeringBehavior + 'static>(mut self, behavior: B) -> Self {
        self.push(behavior);
        self
    }

    /// Index of the behaviour that produced the most recent output, or `None`
    /// if no behaviour cleared the threshold on that call.
    pub fn last_used(&self) -> Option<usize> {
        self.last_used
    }
}

impl SteeringBehavior for PrioritySteering {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        let threshold = self.epsilon * self.epsilon;
        let mut output = SteeringOutput::ZERO;
        self.last_used = None;

        for (i, behavior) in self.behaviours.iter_mut().enumerate() {
            output = behavior.steering(character);
            if output.square_magnitude() > threshold {
                trace!(index = i, "priority steering selected behaviour");
                self.last_used = Some(i);
                return output;
            }
        }
        output
    }
}
