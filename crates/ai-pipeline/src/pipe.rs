//! The `SteeringPipe` and its constraint-resolution loop.

use ai_core::{ConstraintId, Kinematic, SteeringOutput};
use ai_steering::SteeringBehavior;
use tracing::{debug, trace, warn};

use crate::{Actuator, Constraint, Decomposer, Goal, Path, PipelineError, PipelineResult, Targeter};

/// Resolution rounds per call unless configured otherwise.
pub const DEFAULT_CONSTRAINT_STEPS: u32 = 100;

/// How the most recent [`SteeringPipe::get_steering`] call was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The actuator produced the output; `rounds` actuator evaluations were
    /// needed (1 means no constraint fired).
    Resolved { rounds: u32 },
    /// The round budget ran out and the fallback behaviour produced the output.
    Fallback,
    /// The round budget ran out with no fallback; the output was zero.
    Exhausted,
}

struct ConstraintSlot {
    constraint:      Box<dyn Constraint>,
    suggestion_used: bool,
}

// ── SteeringPipe ──────────────────────────────────────────────────────────────

/// Targeter → Decomposer → Constraint loop → Actuator steering.
///
/// # Per-call algorithm
///
/// ```text
/// goal  = fold targeters (first writer per channel wins)
/// goal  = decomposers applied in order
/// repeat up to constraint_steps times:
///     actuator.update_path(path, goal)
///     shortest = max = path.max_priority()
///     for each constraint in order:
///         p = will_violate(path, shortest)
///         if 0 < p < shortest: shortest = p; winner = constraint
///     no winner → return actuator.steering(path)
///     goal = winner.suggest(path)
/// budget exhausted → fallback, or zero without one
/// ```
///
/// After any structural change (adding components, swapping the actuator)
/// call [`register_components`](Self::register_components) before the next
/// [`get_steering`](Self::get_steering).  [`SteeringPipeBuilder`] does this
/// for you.
///
/// [`SteeringPipeBuilder`]: crate::SteeringPipeBuilder
pub struct SteeringPipe {
    /// Maximum actuator evaluations per call.
    pub constraint_steps: u32,

    pub(crate) targeters:   Vec<Box<dyn Targeter>>,
    pub(crate) decomposers: Vec<Box<dyn Decomposer>>,
    pub(crate) fallback:    Option<Box<dyn SteeringBehavior>>,
    constraints:            Vec<ConstraintSlot>,
    actuator:               Option<Box<dyn Actuator>>,
    path:                   Option<Box<dyn Path>>,
    registered:             bool,
    last_resolution:        Option<Resolution>,
}

impl Default for SteeringPipe {
    fn default() -> Self {
        Self::new(DEFAULT_CONSTRAINT_STEPS)
    }
}

impl SteeringPipe {
    pub fn new(constraint_steps: u32) -> Self {
        Self {
            constraint_steps,
            targeters:       Vec::new(),
            decomposers:     Vec::new(),
            constraints:     Vec::new(),
            actuator:        None,
            fallback:        None,
            path:            None,
            registered:      false,
            last_resolution: None,
        }
    }

    // ── Topology ──────────────────────────────────────────────────────────

    pub fn add_targeter<T: Targeter + 'static>(&mut self, targeter: T) {
        self.targeters.push(Box::new(targeter));
        self.registered = false;
    }

    pub fn add_decomposer<D: Decomposer + 'static>(&mut self, decomposer: D) {
        self.decomposers.push(Box::new(decomposer));
        self.registered = false;
    }

    /// Append a constraint.  Constraints are evaluated, and ties broken, in
    /// the order they were added.
    pub fn add_constraint<C: Constraint + 'static>(&mut self, constraint: C) -> ConstraintId {
        self.push_constraint(Box::new(constraint))
    }

    pub(crate) fn push_constraint(&mut self, constraint: Box<dyn Constraint>) -> ConstraintId {
        let id = ConstraintId(self.constraints.len() as u32);
        self.constraints.push(ConstraintSlot { constraint, suggestion_used: false });
        self.registered = false;
        id
    }

    /// Replace the actuator.  The cached path belonged to the old actuator
    /// and is discarded.
    pub fn set_actuator<A: Actuator + 'static>(&mut self, actuator: A) {
        self.replace_actuator(Box::new(actuator));
    }

    pub(crate) fn replace_actuator(&mut self, actuator: Box<dyn Actuator>) {
        self.actuator = Some(actuator);
        self.path = None;
        self.registered = false;
    }

    /// Behaviour used when the constraint budget is exhausted.
    pub fn set_fallback<B: SteeringBehavior + 'static>(&mut self, fallback: B) {
        self.fallback = Some(Box::new(fallback));
    }

    /// Remove the fallback; an exhausted budget then yields zero steering.
    pub fn clear_fallback(&mut self) {
        self.fallback = None;
    }

    /// Validate the wiring after a structural change.  Fails without an
    /// actuator or with a zero `constraint_steps` budget.
    pub fn register_components(&mut self) -> PipelineResult<()> {
        if self.actuator.is_none() {
            return Err(PipelineError::MissingActuator);
        }
        self.check_constraint_steps()?;
        if self.targeters.is_empty() {
            warn!("steering pipe has no targeters; every goal will be empty");
        }
        debug!(
            targeters   = self.targeters.len(),
            decomposers = self.decomposers.len(),
            constraints = self.constraints.len(),
            "steering pipe registered",
        );
        self.registered = true;
        Ok(())
    }

    // `constraint_steps` is a public field, so it is checked on every call too.
    fn check_constraint_steps(&self) -> PipelineResult<()> {
        if self.constraint_steps == 0 {
            return Err(PipelineError::Config("constraint_steps must be > 0".into()));
        }
        Ok(())
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Produce this frame's steering for `character`.
    ///
    /// Budget exhaustion is not an error: see [`last_resolution`](Self::last_resolution).
    pub fn get_steering(&mut self, character: &Kinematic) -> PipelineResult<SteeringOutput> {
        if !self.registered {
            return Err(PipelineError::NotRegistered);
        }
        self.check_constraint_steps()?;
        let actuator = self.actuator.as_mut().ok_or(PipelineError::MissingActuator)?;

        // ── Targeting ─────────────────────────────────────────────────────
        let mut goal = Goal::new();
        for (index, targeter) in self.targeters.iter_mut().enumerate() {
            let proposed = targeter.goal(character);
            if goal.can_merge(&proposed) {
                goal.update(&proposed)?;
            } else {
                debug!(targeter = index, "dropped targeter goal with conflicting channels");
            }
        }

        // ── Decomposition ─────────────────────────────────────────────────
        for decomposer in &mut self.decomposers {
            goal = decomposer.decompose(character, goal);
        }

        // ── Constraint resolution ─────────────────────────────────────────
        let path = self.path.get_or_insert_with(|| actuator.create_path());
        for slot in &mut self.constraints {
            slot.suggestion_used = false;
        }

        for round in 0..self.constraint_steps {
            actuator.update_path(&mut **path, character, &goal)?;

            let max_violation = path.max_priority();
            let mut shortest = max_violation;
            let mut winner = None;
            for (index, slot) in self.constraints.iter_mut().enumerate() {
                if let Some(priority) = slot.constraint.will_violate(&**path, shortest) {
                    if priority > 0.0 && priority < shortest {
                        shortest = priority;
                        winner = Some(index);
                    }
                }
            }
            trace!(round, max_violation, shortest, "constraint round");

            let Some(index) = winner else {
                let output = actuator.steering(&**path)?;
                self.last_resolution = Some(Resolution::Resolved { rounds: round + 1 });
                return Ok(output);
            };

            let slot = &mut self.constraints[index];
            goal = slot.constraint.suggest(&**path);
            slot.suggestion_used = true;
            debug!(constraint = index, priority = shortest, "adopted constraint suggestion");
        }

        // ── Budget exhausted ──────────────────────────────────────────────
        match self.fallback.as_mut() {
            Some(fallback) => {
                debug!(steps = self.constraint_steps, "constraint budget exhausted, using fallback");
                self.last_resolution = Some(Resolution::Fallback);
                Ok(fallback.steering(character))
            }
            None => {
                warn!(steps = self.constraint_steps, "constraint budget exhausted with no fallback");
                self.last_resolution = Some(Resolution::Exhausted);
                Ok(SteeringOutput::ZERO)
            }
        }
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// How the most recent successful `get_steering` call was resolved.
    pub fn last_resolution(&self) -> Option<Resolution> {
        self.last_resolution
    }

    /// Whether `id`'s suggestion was adopted during the most recent call.
    /// Unknown ids report `false`.
    pub fn suggestion_used(&self, id: ConstraintId) -> bool {
        self.constraints.get(id.index()).is_some_and(|slot| slot.suggestion_used)
    }

    /// The cached path, as last planned by the actuator.
    pub fn path(&self) -> Option<&dyn Path> {
        self.path.as_deref()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// Lets a pipe sit inside other steering combinators.  Errors are logged and
/// produce zero steering.
impl SteeringBehavior for SteeringPipe {
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        self.get_steering(character).unwrap_or_else(|e| {
            warn!(error = %e, "steering pipe failed");
            SteeringOutput::ZERO
        })
    }
}
