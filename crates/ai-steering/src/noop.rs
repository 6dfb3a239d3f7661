//! A no-op steering behaviour — the character is never pushed.

use ai_core::{Kinematic, SteeringOutput};

use crate::SteeringBehavior;

/// A [`SteeringBehavior`] that always returns zero.
///
/// Useful as a placeholder in tests, or as the last entry of a
/// [`PrioritySteering`][crate::PrioritySteering] list to make "coast" the
/// explicit default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSteering;

impl SteeringBehavior for NoSteering {
    #[inline]
    fn steering(&mut self, _character: &Kinematic) -> SteeringOutput {
        SteeringOutput::ZERO
    }
}
