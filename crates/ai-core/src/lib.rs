//! `ai-core` — foundational types for the game AI toolkit.
//!
//! This crate is a dependency of every other `ai-*` crate.  It intentionally
//! has no `ai-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`math`]        | `Real`, `Vector3`, `Sphere`                           |
//! | [`kinematic`]   | `SteeringOutput`, `Location`, `Kinematic`, integration |
//! | [`ids`]         | `ActionId`, `ConstraintId`                            |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`rng`]         | `AiRng` (seedable uniform source)                     |
//! | [`config`]      | `AgentConfig`                                         |
//! | [`error`]       | `AiError`, `AiResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod kinematic;
pub mod math;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::AgentConfig;
pub use error::{AiError, AiResult};
pub use ids::{ActionId, ConstraintId};
pub use kinematic::{Kinematic, Location, SteeringOutput};
pub use math::{Real, Sphere, Vector3};
pub use rng::AiRng;
pub use time::{Frame, FrameClock};
