//! The `SteeringBehavior` trait — the main extension point for movement code.

use ai_core::{Kinematic, SteeringOutput};

/// Pluggable dynamic steering.
///
/// Implement this trait to define how a character accelerates toward (or away
/// from) something.  The returned [`SteeringOutput`] is an acceleration: the
/// host integrates it, e.g. with [`Kinematic::integrate_steering`].
///
/// Calls take `&mut self` because some behaviours carry per-frame state (the
/// wander target, the priority combinator's last choice).
///
/// # Contract
///
/// - Must not block or perform I/O.
/// - Must return a finite output: degenerate geometry (zero-length
///   directions) yields zero, never NaN.
///
/// # Example
///
/// ```rust,ignore
/// struct HoldStill;
///
/// impl SteeringBehavior for HoldStill {
///     fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
///         SteeringOutput::new(-character.velocity, -character.rotation)
///     }
/// }
/// ```
pub trait SteeringBehavior {
    /// Compute this frame's correction for `character`.
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput;
}

impl<B: SteeringBehavior + ?Sized> SteeringBehavior for Box<B> {
    #[inline]
    fn steering(&mut self, character: &Kinematic) -> SteeringOutput {
        (**self).steering(character)
    }
}
