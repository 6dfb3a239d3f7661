//! Fluent builder for constructing a [`SteeringPipe`].

use ai_steering::SteeringBehavior;

use crate::pipe::DEFAULT_CONSTRAINT_STEPS;
use crate::{Actuator, Constraint, Decomposer, PipelineError, PipelineResult, SteeringPipe, Targeter};

/// Fluent builder for [`SteeringPipe`].
///
/// # Required inputs
///
/// - an [`Actuator`] via [`.actuator(a)`](Self::actuator)
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                      |
/// |-------------------------|------------------------------|
/// | `.constraint_steps(n)`  | `DEFAULT_CONSTRAINT_STEPS`   |
/// | `.targeter(t)`          | none                         |
/// | `.decomposer(d)`        | none                         |
/// | `.constraint(c)`        | none                         |
/// | `.fallback(b)`          | none (exhaustion gives zero) |
///
/// Constraints receive [`ConstraintId`][ai_core::ConstraintId]s in the order
/// they are added, starting from 0.
///
/// # Example
///
/// ```rust,ignore
/// let mut pipe = SteeringPipeBuilder::new()
///     .targeter(FixedGoalTargeter::new(Goal::new().with_position(goal)))
///     .constraint(AvoidSpheresConstraint::new(obstacles, 2.0))
///     .actuator(BasicActuator::new(50.0))
///     .fallback(wander)
///     .build()?;
/// let steer = pipe.get_steering(&character)?;
/// ```
pub struct SteeringPipeBuilder {
    constraint_steps: u32,
    targeters:        Vec<Box<dyn Targeter>>,
    decomposers:      Vec<Box<dyn Decomposer>>,
    constraints:      Vec<Box<dyn Constraint>>,
    actuator:         Option<Box<dyn Actuator>>,
    fallback:         Option<Box<dyn SteeringBehavior>>,
}

impl Default for SteeringPipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SteeringPipeBuilder {
    pub fn new() -> Self {
        Self {
            constraint_steps: DEFAULT_CONSTRAINT_STEPS,
            targeters:        Vec::new(),
            decomposers:      Vec::new(),
            constraints:      Vec::new(),
            actuator:         None,
            fallback:         None,
        }
    }

    /// Maximum actuator evaluations per `get_steering` call.  Must be > 0.
    pub fn constraint_steps(mut self, steps: u32) -> Self {
        self.constraint_steps = steps;
        self
    }

    pub fn targeter<T: Targeter + 'static>(mut self, targeter: T) -> Self {
        self.targeters.push(Box::new(targeter));
        self
    }

    pub fn decomposer<D: Decomposer + 'static>(mut self, decomposer: D) -> Self {
        self.decomposers.push(Box::new(decomposer));
        self
    }

    pub fn constraint<C: Constraint + 'static>(mut self, constraint: C) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    pub fn actuator<A: Actuator + 'static>(mut self, actuator: A) -> Self {
        self.actuator = Some(Box::new(actuator));
        self
    }

    pub fn fallback<B: SteeringBehavior + 'static>(mut self, fallback: B) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Validate inputs, assemble the pipe and register its components.
    pub fn build(self) -> PipelineResult<SteeringPipe> {
        if self.constraint_steps == 0 {
            return Err(PipelineError::Config("constraint_steps must be > 0".into()));
        }
        let actuator = self.actuator.ok_or(PipelineError::MissingActuator)?;

        let mut pipe = SteeringPipe::new(self.constraint_steps);
        pipe.targeters.extend(self.targeters);
        pipe.decomposers.extend(self.decomposers);
        for constraint in self.constraints {
            pipe.push_constraint(constraint);
        }
        pipe.replace_actuator(actuator);
        pipe.fallback = self.fallback;

        pipe.register_components()?;
        Ok(pipe)
    }
}
