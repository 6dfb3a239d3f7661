//! `ai-pipeline` — goal-driven steering with constraint resolution.
//!
//! A [`SteeringPipe`] turns a character's situation into steering in four
//! stages: targeters say where to go, decomposers break that into something
//! reachable, constraints veto paths that would hit something and propose
//! alternatives, and an actuator turns the surviving path into a
//! [`SteeringOutput`][ai_core::SteeringOutput].
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`goal`]       | `Goal`, `GoalChannels`                                     |
//! | [`path`]       | `Path` trait, `BasicPath`                                  |
//! | [`components`] | `Targeter`, `Decomposer`, `Constraint`, `Actuator` traits  |
//! | [`pipe`]       | `SteeringPipe`, `Resolution`                               |
//! | [`builder`]    | `SteeringPipeBuilder`                                      |
//! | [`basic`]      | `FixedGoalTargeter`, `SubGoalDecomposer`, `AvoidSpheresConstraint`, `BasicActuator` |
//! | [`error`]      | `PipelineError`, `PipelineResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                 |
//! |---------|----------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Goal`. |

pub mod basic;
pub mod builder;
pub mod components;
pub mod error;
pub mod goal;
pub mod path;
pub mod pipe;


pub use basic::{AvoidSpheresConstraint, BasicActuator, FixedGoalTargeter, SubGoalDecomposer};
pub use builder::SteeringPipeBuilder;
pub use components::{Actuator, Constraint, Decomposer, Targeter};
pub use error::{PipelineError, PipelineResult};
pub use goal::{Goal, GoalChannels};
pub use path::{BasicPath, Path};
pub use pipe::{DEFAULT_CONSTRAINT_STEPS, Resolution, SteeringPipe};
