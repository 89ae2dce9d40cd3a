//! Scene-graph error type.

use thiserror::Error;

use bdi_core::{LocationId, RoomId};

/// Errors produced by `bdi-scene`.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("{what} name must not be empty")]
    EmptyName { what: &'static str },

    #[error("room {0:?} already exists")]
    DuplicateRoom(String),

    #[error("room {name:?} has invalid geometry: position ({x}, {y}), size {w}×{h}")]
    InvalidExtent { name: String, x: f64, y: f64, w: f64, h: f64 },

    #[error("room {0:?} not found")]
    UnknownRoom(String),

    #[error("room {0} not found in scene")]
    RoomNotFound(RoomId),

    #[error("location {location:?} already exists in room {room:?}")]
    DuplicateLocation { room: String, location: String },

    #[error("location {location:?} at ({x}, {y}) lies outside room {room:?}")]
    LocationOutOfBounds { room: String, location: String, x: f64, y: f64 },

    #[error("location {0} not found in scene")]
    UnknownLocation(LocationId),

    #[error("location {0} does not lie inside any room")]
    Unlocatable(LocationId),

    #[error("room {0:?} cannot be adjacent to itself")]
    SelfAdjacent(String),

    #[error("adjacency {from:?} → {to:?} has no matching {to:?} → {from:?}")]
    AsymmetricAdjacency { from: String, to: String },

    #[error("scene cannot hold more than {max} {what}")]
    Capacity { what: &'static str, max: u32 },

    #[error("line {line}: {source}")]
    Row {
        line:   usize,
        #[source]
        source: Box<SceneError>,
    },

    #[error("scene parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;
