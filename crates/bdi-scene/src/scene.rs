//! The read-only `Scene` and its `SceneBuilder`.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds every room's bounding box so an arbitrary
//! floor position can be resolved to the room containing it.  Rooms that
//! share a wall both contain the wall; lookups then return the room that
//! was created first.

use std::collections::HashMap;

use rstar::{Envelope, PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use bdi_core::{LocationId, Rect, RoomId, Vec2};

use crate::path::breadth_first;
use crate::{Location, Path, Room, SceneError, SceneResult};

// ── R-tree room entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a room's bounding box and its id.
#[derive(Clone, Debug)]
struct RoomEntry {
    bounds: AABB<[f64; 2]>,
    id:     RoomId,
}

impl RoomEntry {
    fn new(room: &Room) -> Self {
        let min = room.bounds.origin;
        let max = room.bounds.max();
        Self {
            bounds: AABB::from_corners([min.x, min.y], [max.x, max.y]),
            id:     room.id,
        }
    }
}

impl RTreeObject for RoomEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

impl PointDistance for RoomEntry {
    /// Squared distance from `point` to the box; zero anywhere inside it.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.bounds.distance_2(point)
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.bounds.contains_point(point)
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Immutable room graph with point-locations and a spatial index.
///
/// Do not construct directly; use [`SceneBuilder`].
pub struct Scene {
    rooms:      Vec<Room>,
    locations:  Vec<Location>,
    room_names: HashMap<String, RoomId>,
    index:      RTree<RoomEntry>,
}

impl Scene {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.room_names.get(name).map(|id| &self.rooms[id.index()])
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// The location called `name` inside the room called `room`.
    pub fn location_in(&self, room: &str, name: &str) -> Option<&Location> {
        let room = self.room_by_name(room)?;
        room.locations
            .iter()
            .map(|id| &self.locations[id.index()])
            .find(|loc| loc.name == name)
    }

    /// First location called `name` in any room, scanning rooms in creation
    /// order.
    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.name == name)
    }

    /// Centre waypoint of `room`.
    pub fn room_center(&self, room: RoomId) -> Option<Vec2> {
        self.room(room).map(Room::center)
    }

    pub fn is_adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.room(a).is_some_and(|r| r.is_adjacent(b))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The room containing absolute point `p`, lowest `RoomId` first when
    /// several rooms share it.  `None` if `p` is outside every room.
    pub fn room_at(&self, p: Vec2) -> Option<RoomId> {
        self.index
            .locate_all_at_point(&[p.x, p.y])
            .map(|e| e.id)
            .min()
    }

    /// Resolve `location` to its owning room.
    ///
    /// # Errors
    ///
    /// - [`SceneError::UnknownLocation`] if the id is not in this scene.
    /// - [`SceneError::Unlocatable`] if its position lies in no room's
    ///   bounding box, which only a malformed scene can produce.
    pub fn resolve_room(&self, location: LocationId) -> SceneResult<RoomId> {
        let loc = self
            .location(location)
            .ok_or(SceneError::UnknownLocation(location))?;
        let owner = &self.rooms[loc.room.index()];
        if owner.bounds.contains(loc.position) {
            return Ok(owner.id);
        }
        self.room_at(loc.position)
            .ok_or(SceneError::Unlocatable(location))
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Fewest-rooms path between the rooms owning `start` and `end`.
    ///
    /// Same room → one-element path.  Unreachable → empty path (not an
    /// error).
    pub fn find_shortest_path(&self, start: LocationId, end: LocationId) -> SceneResult<Path> {
        let from = self.resolve_room(start)?;
        let to = self.resolve_room(end)?;
        Ok(breadth_first(&self.rooms, from, to))
    }

    /// Fewest-rooms path between two rooms.
    ///
    /// # Errors
    ///
    /// [`SceneError::RoomNotFound`] if either id is not in this scene.
    pub fn find_room_path(&self, from: RoomId, to: RoomId) -> SceneResult<Path> {
        for id in [from, to] {
            if self.room(id).is_none() {
                return Err(SceneError::RoomNotFound(id));
            }
        }
        let path = breadth_first(&self.rooms, from, to);
        debug!(from = %self.rooms[from.index()].name, to = %self.rooms[to.index()].name,
               rooms = path.len(), "room path computed");
        Ok(path)
    }

    /// Room names along `path`, for display and assertions.
    pub fn path_names<'a>(&'a self, path: &Path) -> Vec<&'a str> {
        path.rooms()
            .iter()
            .filter_map(|&id| self.room(id).map(Room::name))
            .collect()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("rooms", &self.rooms)
            .field("locations", &self.locations)
            .finish()
    }
}

// ── SceneBuilder ──────────────────────────────────────────────────────────────

/// Assemble a [`Scene`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use bdi_core::Vec2;
/// use bdi_scene::SceneBuilder;
///
/// let mut b = SceneBuilder::new();
/// b.create_room("Hallway", 0.0, 0.0, 10.0, 10.0).unwrap();
/// b.create_room("Kitchen", 10.0, 0.0, 10.0, 10.0).unwrap();
/// let fridge = b.create_location("Fridge", Vec2::new(8.0, 2.0), "Kitchen").unwrap();
/// b.connect("Hallway", "Kitchen").unwrap();
/// let scene = b.build().unwrap();
/// assert_eq!(scene.location(fridge).unwrap().position(), Vec2::new(18.0, 2.0));
/// ```
#[derive(Default)]
pub struct SceneBuilder {
    rooms:      Vec<Room>,
    locations:  Vec<Location>,
    room_names: HashMap<String, RoomId>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room with top-left corner `(x, y)` and size `w × h`.
    ///
    /// # Errors
    ///
    /// [`SceneError::EmptyName`], [`SceneError::DuplicateRoom`], or
    /// [`SceneError::InvalidExtent`] for a non-finite position or a
    /// non-positive / non-finite size.
    pub fn create_room(&mut self, name: &str, x: f64, y: f64, w: f64, h: f64) -> SceneResult<RoomId> {
        if name.trim().is_empty() {
            return Err(SceneError::EmptyName { what: "room" });
        }
        if self.room_names.contains_key(name) {
            return Err(SceneError::DuplicateRoom(name.to_owned()));
        }
        let origin = Vec2::new(x, y);
        let size = Vec2::new(w, h);
        if !origin.is_finite() || !size.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(SceneError::InvalidExtent { name: name.to_owned(), x, y, w, h });
        }

        let id = RoomId::try_from(self.rooms.len())
            .map_err(|_| SceneError::Capacity { what: "rooms", max: u32::MAX })?;
        self.rooms.push(Room {
            id,
            name:      name.to_owned(),
            bounds:    Rect::new(origin, size),
            locations: Vec::new(),
            adjacent:  Vec::new(),
        });
        self.room_names.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Add a location at `relative` (offset from the room's top-left corner)
    /// inside the room called `room`.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownRoom`], [`SceneError::DuplicateLocation`], or
    /// [`SceneError::LocationOutOfBounds`] if `relative` is outside
    /// `[0, w] × [0, h]`.
    pub fn create_location(&mut self, name: &str, relative: Vec2, room: &str) -> SceneResult<LocationId> {
        if name.trim().is_empty() {
            return Err(SceneError::EmptyName { what: "location" });
        }
        let room_id = self.room_id(room)?;
        let owner = &self.rooms[room_id.index()];

        let duplicate = owner
            .locations
            .iter()
            .any(|id| self.locations[id.index()].name == name);
        if duplicate {
            return Err(SceneError::DuplicateLocation {
                room:     room.to_owned(),
                location: name.to_owned(),
            });
        }
        if !relative.is_finite() || !owner.bounds.contains_relative(relative) {
            return Err(SceneError::LocationOutOfBounds {
                room:     room.to_owned(),
                location: name.to_owned(),
                x:        relative.x,
                y:        relative.y,
            });
        }

        let id = LocationId::try_from(self.locations.len())
            .map_err(|_| SceneError::Capacity { what: "locations", max: u32::MAX })?;
        let position = owner.bounds.origin + relative;
        self.locations.push(Location {
            id,
            name: name.to_owned(),
            relative,
            position,
            room: room_id,
        });
        self.rooms[room_id.index()].locations.push(id);
        Ok(id)
    }

    /// Register the **directed** edge `from → to`.
    ///
    /// Adjacency must end up symmetric; [`build`](Self::build) rejects a
    /// scene where this edge has no reverse.  Prefer [`connect`](Self::connect).
    /// Registering the same edge twice is a no-op.
    pub fn add_adjacent_room(&mut self, from: &str, to: &str) -> SceneResult<()> {
        let a = self.room_id(from)?;
        let b = self.room_id(to)?;
        if a == b {
            return Err(SceneError::SelfAdjacent(from.to_owned()));
        }
        let adjacent = &mut self.rooms[a.index()].adjacent;
        if !adjacent.contains(&b) {
            adjacent.push(b);
        }
        Ok(())
    }

    /// Convenience: register the door between `a` and `b` in both directions.
    pub fn connect(&mut self, a: &str, b: &str) -> SceneResult<()> {
        self.add_adjacent_room(a, b)?;
        self.add_adjacent_room(b, a)
    }

    /// `true` if the directed edge `from → to` has been registered.
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        match (self.room_names.get(from), self.room_names.get(to)) {
            (Some(a), Some(b)) => self.rooms[a.index()].is_adjacent(*b),
            _ => false,
        }
    }

    pub fn room_id(&self, name: &str) -> SceneResult<RoomId> {
        self.room_names
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownRoom(name.to_owned()))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Validate adjacency symmetry, bulk-load the R-tree, and freeze.
    pub fn build(self) -> SceneResult<Scene> {
        for room in &self.rooms {
            for &next in &room.adjacent {
                if !self.rooms[next.index()].is_adjacent(room.id) {
                    return Err(SceneError::AsymmetricAdjacency {
                        from: room.name.clone(),
                        to:   self.rooms[next.index()].name.clone(),
                    });
                }
            }
        }

        let entries: Vec<RoomEntry> = self.rooms.iter().map(RoomEntry::new).collect();
        let index = RTree::bulk_load(entries);

        debug!(rooms = self.rooms.len(), locations = self.locations.len(), "scene built");

        Ok(Scene {
            rooms:      self.rooms,
            locations:  self.locations,
            room_names: self.room_names,
            index,
        })
    }
}
