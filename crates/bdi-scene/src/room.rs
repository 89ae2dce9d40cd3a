//! Rooms and the named point-locations inside them.

use bdi_core::{LocationId, Rect, RoomId, Vec2};

/// A named point inside a room (e.g. "Fridge" in "Kitchen").
///
/// The absolute position is computed once at creation from the owning
/// room's origin and never changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub(crate) id:       LocationId,
    pub(crate) name:     String,
    pub(crate) relative: Vec2,
    pub(crate) position: Vec2,
    pub(crate) room:     RoomId,
}

impl Location {
    #[inline]
    pub fn id(&self) -> LocationId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offset from the owning room's top-left corner.
    #[inline]
    pub fn relative_position(&self) -> Vec2 {
        self.relative
    }

    /// Absolute position: `room.position + relative_position`.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The room this location belongs to.
    #[inline]
    pub fn room(&self) -> RoomId {
        self.room
    }
}

/// An axis-aligned room.
///
/// `adjacent` keeps the order doors were registered in; breadth-first
/// search expands neighbours in that order, which is what makes tie-breaks
/// between equally short routes reproducible.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub(crate) id:        RoomId,
    pub(crate) name:      String,
    pub(crate) bounds:    Rect,
    pub(crate) locations: Vec<LocationId>,
    pub(crate) adjacent:  Vec<RoomId>,
}

impl Room {
    #[inline]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-left corner in absolute coordinates.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.bounds.origin
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.bounds.size
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The waypoint agents steer to when passing through this room.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Locations owned by this room, in creation order.
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    /// Neighbouring rooms, in registration order.
    pub fn adjacent(&self) -> &[RoomId] {
        &self.adjacent
    }

    #[inline]
    pub fn is_adjacent(&self, other: RoomId) -> bool {
        self.adjacent.contains(&other)
    }
}
