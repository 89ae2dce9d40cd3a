//! `bdi-motion`: incremental movement of one agent through a scene.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`motion`] | `Motion`: position, waypoint target, room path   |
//! | [`error`]  | `MotionError`, `MotionResult<T>`                 |
//!
//! # Movement model (constant-speed waypoints)
//!
//! 1. [`Motion::move_to`] asks the scene for a room path from the current
//!    room to the destination's room and stores it with its cursor at the
//!    current room.
//! 2. Each waypoint is the centre of the room under the cursor; once the
//!    cursor reaches the final room the waypoint is the destination's
//!    physical position.
//! 3. [`Motion::update`] moves at most `speed` units per tick towards the
//!    waypoint.  Reaching one snaps exactly onto it and advances the cursor
//!    by one room; reaching the final one ends the journey.

pub mod error;
pub mod motion;

#[cfg(test)]
mod tests;

pub use error::{MotionError, MotionResult};
pub use motion::{Motion, MotionState};
