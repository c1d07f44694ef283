//! Screen-space ↔ workspace-space conversions.
//!
//! Pointer events arrive in screen space. Nodes live in workspace space, which
//! is independent of zoom. Deltas are converted by dividing by the current
//! scale so a dragged node tracks the pointer at any zoom level.

use std::ops::{Add, Neg, Sub};

/// A 2D coordinate pair, in either screen or workspace space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Marker for "no gesture active" in hosts that expect a plain pair.
    pub const SENTINEL: Point = Point { x: -1.0, y: -1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle as measured by the renderer (screen space).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build from edges; a reversed pair of edges still yields a positive size.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left.min(right), top.min(bottom), (right - left).abs(), (bottom - top).abs())
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Convert a screen-space delta to workspace space.
///
/// `scale` must be non-zero; the viewport clamp guarantees it.
#[inline]
pub fn screen_delta_to_workspace(delta: Point, scale: f32) -> Point {
    Point::new(delta.x / scale, delta.y / scale)
}

/// Convert a workspace-space delta to screen space.
#[inline]
pub fn workspace_delta_to_screen(delta: Point, scale: f32) -> Point {
    delta.scaled(scale)
}
