//! CSV scene loader.
//!
//! # CSV format
//!
//! One row per record.  Columns that do not apply to a record kind are left
//! empty.
//!
//! ```csv
//! kind,name,room,x,y,w,h
//! room,Hallway,,0,0,10,10
//! room,Kitchen,,10,0,10,10
//! location,Fridge,Kitchen,8,2,,
//! door,Hallway,Kitchen,,,,
//! ```
//!
//! | `kind`     | `name`      | `room`      | `x`,`y`            | `w`,`h` |
//! |------------|-------------|-------------|--------------------|---------|
//! | `room`     | room name   | -           | top-left corner    | size    |
//! | `location` | location    | owning room | offset inside room | -       |
//! | `door`     | first room  | second room | -                  | -       |
//!
//! Rooms are created first regardless of row order, then locations, then
//! doors (registered in both directions).  Every record goes through
//! [`SceneBuilder`], so the file is held to the same validation rules as
//! scenes built in code.

use std::io::Read;
use std::path::Path as FsPath;

use serde::Deserialize;

use bdi_core::Vec2;

use crate::{Scene, SceneBuilder, SceneError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
enum RecordKind {
    Room,
    Location,
    Door,
}

#[derive(Deserialize)]
struct SceneRecord {
    kind: RecordKind,
    name: String,
    room: Option<String>,
    x:    Option<f64>,
    y:    Option<f64>,
    w:    Option<f64>,
    h:    Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scene from a CSV file.
pub fn load_scene_csv(path: &FsPath) -> Result<Scene, SceneError> {
    let file = std::fs::File::open(path).map_err(SceneError::Io)?;
    load_scene_reader(file)
}

/// Like [`load_scene_csv`] but accepts any `Read` source (e.g. a
/// `std::io::Cursor` over an embedded layout).
pub fn load_scene_reader<R: Read>(reader: R) -> Result<Scene, SceneError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records: Vec<(usize, SceneRecord)> = Vec::new();
    for (i, result) in csv_reader.deserialize::<SceneRecord>().enumerate() {
        let row = result.map_err(|e| SceneError::Parse(e.to_string()))?;
        // Row 1 is the header.
        records.push((i + 2, row));
    }

    let mut builder = SceneBuilder::new();

    for (line, r) in records.iter().filter(|(_, r)| r.kind == RecordKind::Room) {
        let x = require(r.x, *line, "x")?;
        let y = require(r.y, *line, "y")?;
        let w = require(r.w, *line, "w")?;
        let h = require(r.h, *line, "h")?;
        builder.create_room(&r.name, x, y, w, h).map_err(|e| at_line(*line, e))?;
    }

    for (line, r) in records.iter().filter(|(_, r)| r.kind == RecordKind::Location) {
        let room = require(r.room.as_deref(), *line, "room")?;
        let x = require(r.x, *line, "x")?;
        let y = require(r.y, *line, "y")?;
        builder
            .create_location(&r.name, Vec2::new(x, y), room)
            .map_err(|e| at_line(*line, e))?;
    }

    for (line, r) in records.iter().filter(|(_, r)| r.kind == RecordKind::Door) {
        let other = require(r.room.as_deref(), *line, "room")?;
        builder.connect(&r.name, other).map_err(|e| at_line(*line, e))?;
    }

    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at_line(line: usize, source: SceneError) -> SceneError {
    SceneError::Row { line, source: Box::new(source) }
}

fn require<T>(value: Option<T>, line: usize, column: &str) -> Result<T, SceneError> {
    value.ok_or_else(|| SceneError::Parse(format!("line {line}: missing required column {column:?}")))
}
