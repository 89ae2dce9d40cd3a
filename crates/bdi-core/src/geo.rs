//! Planar coordinate types.
//!
//! Scenes are laid out on a flat floor plan with `y` growing downwards (a
//! room's `position` is its top-left corner).  Double precision keeps the
//! snap-to-target arithmetic in the motion system exact for the small
//! integer layouts houses are usually described in.

use std::ops::{Add, Mul, Sub};

/// A 2-D point or extent.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Move at most `max_step` units from `self` towards `target`.
    ///
    /// Returns `target` itself (bit-exact) when it is within reach, so
    /// callers never overshoot.
    pub fn step_towards(self, target: Vec2, max_step: f64) -> Vec2 {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_step || dist == 0.0 {
            return target;
        }
        self + delta * (max_step / dist)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle: top-left `origin` plus `size`.
///
/// Containment is inclusive on every edge, so two rooms that share a wall
/// both contain the points on it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Geometric centre.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// `true` if the absolute point `p` lies inside (edges included).
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }

    /// `true` if the point `rel`, relative to `origin`, lies inside.
    pub fn contains_relative(&self, rel: Vec2) -> bool {
        rel.x >= 0.0 && rel.x <= self.size.x && rel.y >= 0.0 && rel.y <= self.size.y
    }
}
