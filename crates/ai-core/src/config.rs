//! Per-character tuning knobs.
//!
//! Every behaviour exposes its parameters as public fields, so this struct is
//! optional: it is the bundle a host typically loads from a JSON/TOML file and
//! copies into the behaviours it builds.

use crate::{AiError, AiResult, Real};

/// Typical tuning for one steered character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// RNG seed for stochastic behaviours.  `0` seeds from the system clock.
    pub seed: u64,

    /// Fixed simulation step in seconds, for hosts that integrate at a
    /// constant rate.
    pub frame_duration_secs: Real,

    /// Speed cap applied after integration.
    pub max_speed: Real,

    /// Acceleration budget handed to dynamic behaviours and actuators.
    pub max_acceleration: Real,

    /// Rounds of constraint resolution before a pipe falls back.
    pub constraint_steps: u32,

    /// Clearance kept around spherical obstacles.
    pub avoid_margin: Real,

    /// Magnitude below which a priority-steering output counts as "nothing".
    pub priority_epsilon: Real,

    /// Radius of the wander circle.
    pub wander_volatility: Real,

    /// Per-frame jitter applied to the wander target.
    pub wander_turn_speed: Real,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed:                0,
            frame_duration_secs: 1.0 / 60.0,
            max_speed:           20.0,
            max_acceleration:    50.0,
            constraint_steps:    100,
            avoid_margin:        2.0,
            priority_epsilon:    0.01,
            wander_volatility:   20.0,
            wander_turn_speed:   2.0,
        }
    }
}

impl AgentConfig {
    /// Reject values no behaviour can work with.
    pub fn validate(&self) -> AiResult<()> {
        let positive = [
            ("frame_duration_secs", self.frame_duration_secs),
            ("max_speed", self.max_speed),
            ("max_acceleration", self.max_acceleration),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AiError::Config(format!("{name} must be finite and > 0, got {value}")));
            }
        }

        let non_negative = [
            ("avoid_margin", self.avoid_margin),
            ("priority_epsilon", self.priority_epsilon),
            ("wander_volatility", self.wander_volatility),
            ("wander_turn_speed", self.wander_turn_speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AiError::Config(format!("{name} must be finite and >= 0, got {value}")));
            }
        }

        if self.constraint_steps == 0 {
            return Err(AiError::Config("constraint_steps must be > 0".into()));
        }
        Ok(())
    }
}
