//! Freehand stroke model.

use std::fmt;

use super::geometry::Point;

/// Session-local identifier of a stroke.
///
/// Allocated from a monotonically increasing counter when the stroke is
/// created. Never persisted: strokes loaded from storage get fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stroke#{}", self.0)
    }
}

/// Hands out stroke ids for one session.
#[derive(Debug, Clone)]
pub struct StrokeIdAllocator {
    next: u64,
}

impl StrokeIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next unused id.
    pub fn next_id(&mut self) -> StrokeId {
        let id = StrokeId(self.next);
        self.next += 1;
        id
    }
}

impl Default for StrokeIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// One freehand drawing action.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Session-local identity, used to locate the stroke for removal.
    pub id: StrokeId,
    /// Color token (for example `"#ff3b30"`).
    pub color: String,
    /// Line thickness in viewer pixels.
    pub width: f32,
    points: Vec<Point>,
}

impl Stroke {
    /// Create a stroke seeded with its first point.
    pub fn new(id: StrokeId, color: impl Into<String>, width: f32, start: Point) -> Self {
        Self {
            id,
            color: color.into(),
            width,
            points: vec![start],
        }
    }

    /// Rebuild a stroke from an already complete point list.
    pub fn from_points(
        id: StrokeId,
        color: impl Into<String>,
        width: f32,
        points: Vec<Point>,
    ) -> Self {
        Self {
            id,
            color: color.into(),
            width,
            points,
        }
    }

    /// Append a point. Only the in-progress stroke is ever extended; the
    /// committed list hands out shared references only.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether `point` touches the stroke, allowing `tolerance` pixels
    /// beyond the drawn line.
    pub fn hit_test(&self, point: &Point, tolerance: f32) -> bool {
        let reach = tolerance + self.width / 2.0;
        match self.points.as_slice() {
            [] => false,
            [only] => only.distance_to(point) <= reach,
            points => points
                .windows(2)
                .any(|seg| point.distance_to_segment(&seg[0], &seg[1]) <= reach),
        }
    }
}
