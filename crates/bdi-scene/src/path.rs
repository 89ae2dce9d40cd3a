//! Room-level paths and the breadth-first search that produces them.
//!
//! # Cost model
//!
//! Paths minimise the number of rooms visited, not walking distance.  The
//! first shortest path the search reaches wins; among equally short routes
//! that is decided by the order doors were registered in, so results are
//! reproducible but not guaranteed geometrically shortest.

use std::collections::VecDeque;

use bdi_core::RoomId;

use crate::Room;

// ── Path ──────────────────────────────────────────────────────────────────────

/// Ordered room sequence from one query, plus a progress cursor.
///
/// An empty path is a normal result: the destination is unreachable (or
/// there is nowhere left to go).  A one-room path means start and end share
/// a room.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    rooms:  Vec<RoomId>,
    cursor: usize,
}

impl Path {
    /// The empty path.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms, cursor: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Index of the room currently being steered through.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The room under the cursor, or `None` for an empty path.
    #[inline]
    pub fn current(&self) -> Option<RoomId> {
        self.rooms.get(self.cursor).copied()
    }

    /// The final room of the path.
    #[inline]
    pub fn last(&self) -> Option<RoomId> {
        self.rooms.last().copied()
    }

    /// `true` when the cursor sits on the final room.
    #[inline]
    pub fn at_last(&self) -> bool {
        !self.rooms.is_empty() && self.cursor + 1 == self.rooms.len()
    }

    /// Move the cursor one room forward and return the new current room.
    /// Stays put (returning `None`) once the final room is reached.
    pub fn advance(&mut self) -> Option<RoomId> {
        if self.cursor + 1 < self.rooms.len() {
            self.cursor += 1;
            self.current()
        } else {
            None
        }
    }

    /// Rewind the cursor to the first room.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Rooms from the cursor (inclusive) to the end.
    pub fn remaining(&self) -> &[RoomId] {
        self.rooms.get(self.cursor..).unwrap_or(&[])
    }
}

// ── Breadth-first search ──────────────────────────────────────────────────────

/// Fewest-rooms path from `from` to `to` over the adjacency relation.
///
/// `rooms` is indexed by `RoomId`; both ids must be in bounds (the caller
/// validates).  Returns an empty path if `to` is unreachable.
pub(crate) fn breadth_first(rooms: &[Room], from: RoomId, to: RoomId) -> Path {
    if from == to {
        return Path::new(vec![from]);
    }

    // prev[r] = room we reached r from; `None` for unvisited rooms.
    let mut prev: Vec<Option<RoomId>> = vec![None; rooms.len()];
    let mut visited = vec![false; rooms.len()];
    let mut queue = VecDeque::new();

    visited[from.index()] = true;
    queue.push_back(from);

    while let Some(room) = queue.pop_front() {
        for &next in &rooms[room.index()].adjacent {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            prev[next.index()] = Some(room);
            if next == to {
                return reconstruct(&prev, to);
            }
            queue.push_back(next);
        }
    }

    Path::empty()
}

fn reconstruct(prev: &[Option<RoomId>], to: RoomId) -> Path {
    let mut rooms = vec![to];
    let mut cur = to;
    while let Some(p) = prev[cur.index()] {
        rooms.push(p);
        cur = p;
    }
    rooms.reverse();
    Path::new(rooms)
}
