//! `bdi-core`: foundational types for the `bdi` household agent framework.
//!
//! This crate is a dependency of every other `bdi-*` crate.  It has no
//! `bdi-*` dependencies and only `thiserror` (plus optional `serde`) as
//! external ones.
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `RoomId`, `LocationId`                            |
//! | [`geo`]   | `Vec2` point/extent, `Rect` axis-aligned box      |
//! | [`time`]  | `Tick`, `SimClock`, `TimeOfDay`, `SimConfig`      |
//! | [`error`] | `BdiError`, `BdiResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{BdiError, BdiResult};
pub use geo::{Rect, Vec2};
pub use ids::{LocationId, RoomId};
pub use time::{SimClock, SimConfig, Tick, TimeOfDay};
