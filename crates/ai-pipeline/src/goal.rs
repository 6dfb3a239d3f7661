//! Sparse multi-channel steering goals.

use ai_core::{Real, Vector3};
use bitflags::bitflags;

use crate::{PipelineError, PipelineResult};

bitflags! {
    /// The channels a [`Goal`] can constrain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct GoalChannels: u8 {
        const POSITION    = 1 << 0;
        const ORIENTATION = 1 << 1;
        const VELOCITY    = 1 << 2;
        const ROTATION    = 1 << 3;
    }
}

/// What a character should try to achieve, channel by channel.
///
/// Each channel is independent and optional.  Targeters each fill in the
/// channels they care about; the pipe folds them together with
/// [`Goal::update`], which refuses to overwrite a channel already set.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    pub position:    Option<Vector3>,
    pub orientation: Option<Real>,
    pub velocity:    Option<Vector3>,
    pub rotation:    Option<Real>,
}

impl Goal {
    /// A goal with no channels set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_orientation(mut self, orientation: Real) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn with_rotation(mut self, rotation: Real) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// The set of channels this goal constrains.
    pub fn channels(&self) -> GoalChannels {
        let mut channels = GoalChannels::empty();
        channels.set(GoalChannels::POSITION, self.position.is_some());
        channels.set(GoalChannels::ORIENTATION, self.orientation.is_some());
        channels.set(GoalChannels::VELOCITY, self.velocity.is_some());
        channels.set(GoalChannels::ROTATION, self.rotation.is_some());
        channels
    }

    /// `true` if no channel is set in both goals.
    pub fn can_merge(&self, other: &Goal) -> bool {
        !self.channels().intersects(other.channels())
    }

    /// Copy every channel set in `other` into `self`.
    ///
    /// Fails without modifying `self` if any channel is set in both.
    pub fn update(&mut self, other: &Goal) -> PipelineResult<()> {
        let overlap = self.channels() & other.channels();
        if !overlap.is_empty() {
            return Err(PipelineError::GoalConflict { channels: overlap });
        }

        if other.position.is_some() {
            self.position = other.position;
        }
        if other.orientation.is_some() {
            self.orientation = other.orientation;
        }
        if other.velocity.is_some() {
            self.velocity = other.velocity;
        }
        if other.rotation.is_some() {
            self.rotation = other.rotation;
        }
        Ok(())
    }

    /// Unset every channel.
    pub fn clear(&mut self) {
        *self = Goal::default();
    }

    pub fn is_empty(&self) -> bool {
        self.channels().is_empty()
    }
}
