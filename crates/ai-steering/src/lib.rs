//! `ai-steering` — steering behaviours and their combinators.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                         |
//! |---------------|------------------------------------------------------------------|
//! | [`behavior`]  | `SteeringBehavior` trait                                         |
//! | [`seek`]      | `Seek`, `Flee`, `Arrive`                                         |
//! | [`wander`]    | `Wander`                                                         |
//! | [`avoid`]     | `AvoidSphere`                                                    |
//! | [`blended`]   | `BlendedSteering`, `WeightedBehavior`                            |
//! | [`priority`]  | `PrioritySteering`                                               |
//! | [`kinematic`] | `KinematicMovement` trait and kinematic seek/flee/arrive/wander  |
//! | [`noop`]      | `NoSteering` — placeholder that never steers                     |
//! | [`error`]     | `SteeringError`, `SteeringResult<T>`                             |
//!
//! # Design notes
//!
//! Behaviours never hold a pointer to the character they steer.  The host
//! (or an enclosing combinator) passes the current [`Kinematic`] snapshot on
//! every call, so a single behaviour instance can be re-targeted or shared
//! between composition trees without any wiring step.
//!
//! Dynamic behaviours return accelerations; kinematic ones return velocities.
//!
//! [`Kinematic`]: ai_core::Kinematic

pub mod avoid;
pub mod behavior;
pub mod blended;
pub mod error;
pub mod kinematic;
pub mod noop;
pub mod priority;
pub mod seek;
pub mod wander;


pub use avoid::AvoidSphere;
pub use behavior::SteeringBehavior;
pub use blended::{BlendedSteering, WeightedBehavior};
pub use error::{SteeringError, SteeringResult};
pub use kinematic::{KinematicArrive, KinematicFlee, KinematicMovement, KinematicSeek, KinematicWander};
pub use noop::NoSteering;
pub use priority::PrioritySteering;
pub use seek::{Arrive, Flee, Seek};
pub use wander::Wander;
