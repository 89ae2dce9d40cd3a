//! Per-agent motion state and the per-tick stepping rule.

use tracing::{debug, trace};

use bdi_core::{LocationId, RoomId, Vec2};
use bdi_scene::{Path, Scene, SceneError};

use crate::{MotionError, MotionResult};

/// Coarse motion state derived from [`Motion`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    Moving,
}

/// The movement state of one agent.
///
/// An agent is **idle** (no destination) or **moving** (a destination, a
/// waypoint target and a room path are all set).  The three fields are
/// always set and cleared together.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    /// Units per tick.
    speed: f64,

    position: Vec2,

    /// Room whose waypoint the agent last reached, or the room the latest
    /// journey was planned from.
    current_room: RoomId,

    destination: Option<LocationId>,

    /// Waypoint currently being steered to.
    target: Option<Vec2>,

    path: Path,
}

impl Motion {
    /// Idle motion standing on `location`.
    pub fn at_location(scene: &Scene, location: LocationId, speed: f64) -> MotionResult<Self> {
        let room = scene.resolve_room(location)?;
        let position = scene
            .location(location)
            .map(|l| l.position())
            .ok_or(SceneError::UnknownLocation(location))?;
        Self::new(position, room, speed)
    }

    /// Idle motion standing on an arbitrary floor point.
    ///
    /// # Errors
    ///
    /// [`MotionError::NotInScene`] if `position` lies in no room.
    pub fn at_position(scene: &Scene, position: Vec2, speed: f64) -> MotionResult<Self> {
        let room = scene
            .room_at(position)
            .ok_or(MotionError::NotInScene(position))?;
        Self::new(position, room, speed)
    }

    fn new(position: Vec2, current_room: RoomId, speed: f64) -> MotionResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(MotionError::InvalidSpeed(speed));
        }
        Ok(Self {
            speed,
            position,
            current_room,
            destination: None,
            target:      None,
            path:        Path::empty(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    #[inline]
    pub fn destination(&self) -> Option<LocationId> {
        self.destination
    }

    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    pub fn state(&self) -> MotionState {
        if self.is_moving() { MotionState::Moving } else { MotionState::Idle }
    }

    /// Rooms still to be steered through, the current waypoint's room
    /// included.  Zero while idle.
    pub fn remaining_waypoints(&self) -> usize {
        self.path.remaining().len()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Start a journey to `destination`, replacing any journey to a
    /// different destination.  Re-issuing the journey already under way
    /// keeps its path and waypoint.
    ///
    /// The route is planned from the room the agent is standing in, which
    /// may be ahead of [`current_room`](Self::current_room) mid-journey.
    /// An unreachable destination leaves the motion idle; that is not an
    /// error.
    ///
    /// # Errors
    ///
    /// [`MotionError::Scene`] if `destination` is not in `scene` or lies in
    /// no room.
    pub fn move_to(&mut self, scene: &Scene, destination: LocationId) -> MotionResult<()> {
        let to = scene.resolve_room(destination)?;
        if self.destination == Some(destination) {
            return Ok(());
        }

        let from = scene.room_at(self.position).unwrap_or(self.current_room);
        let path = scene.find_room_path(from, to)?;
        self.current_room = from;

        if path.is_empty() {
            debug!(%destination, %from, "destination unreachable, staying idle");
            self.stop();
            return Ok(());
        }

        self.path = path;
        self.destination = Some(destination);
        self.target = self.waypoint(scene);
        debug!(%destination, rooms = self.path.len(), target = ?self.target, "journey started");
        Ok(())
    }

    /// Abandon the current journey where the agent stands.
    pub fn stop(&mut self) {
        self.destination = None;
        self.target = None;
        self.path = Path::empty();
    }

    /// Advance one tick.  Returns `true` on the tick the destination is
    /// reached; `false` otherwise, including while idle.
    pub fn update(&mut self, scene: &Scene) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        if self.position.distance(target) > self.speed {
            self.position = self.position.step_towards(target, self.speed);
            trace!(position = %self.position, target = %target, "step");
            return false;
        }

        self.position = target;

        if self.path.at_last() {
            if let Some(room) = self.path.last() {
                self.current_room = room;
            }
            debug!(destination = ?self.destination, position = %self.position, "arrived");
            self.stop();
            return true;
        }

        if let Some(room) = self.path.current() {
            self.current_room = room;
        }
        self.path.advance();
        self.target = self.waypoint(scene);
        trace!(room = %self.current_room, next = ?self.target, "waypoint reached");
        false
    }

    /// Waypoint for the path cursor: the destination itself on the final
    /// room, otherwise the centre of the room under the cursor.
    fn waypoint(&self, scene: &Scene) -> Option<Vec2> {
        if self.path.at_last() {
            let destination = self.destination?;
            scene.location(destination).map(|l| l.position())
        } else {
            scene.room_center(self.path.current()?)
        }
    }
}
