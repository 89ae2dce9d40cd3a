//! `bdi-scene`: rooms, point-locations, and room-level routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`room`]   | `Room`, `Location`                                          |
//! | [`scene`]  | `Scene` (read-only graph + R-tree), `SceneBuilder`          |
//! | [`path`]   | `Path`: room sequence with a cursor; breadth-first search   |
//! | [`loader`] | `load_scene_csv`, `load_scene_reader`                       |
//! | [`error`]  | `SceneError`, `SceneResult<T>`                              |
//!
//! # Lifecycle
//!
//! A scene is assembled once through [`SceneBuilder`], which does every
//! validation (duplicate names, out-of-bounds locations, one-sided doors),
//! and then frozen into a [`Scene`].  Nothing mutates a `Scene`
//! afterwards, so agents share it by plain `&Scene`.

pub mod error;
pub mod loader;
pub mod path;
pub mod room;
pub mod scene;


pub use error::{SceneError, SceneResult};
pub use loader::{load_scene_csv, load_scene_reader};
pub use path::Path;
pub use room::{Location, Room};
pub use scene::{Scene, SceneBuilder};
