//! Axis-aligned collision rectangles
//!
//! Paddle/ball overlap uses a vertex-in-box test rather than full SAT. A
//! one-directional vertex test misses configurations where no corner of the
//! other box falls inside this one, so callers test both directions via
//! [`overlaps`].

use glam::Vec2;

/// Axis-aligned box given by center and (width, height) shape.
///
/// Built fresh each tick for both paddles and the ball; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub shape: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, shape: Vec2) -> Self {
        Self { center, shape }
    }

    /// Box corner with the smallest coordinate on both axes.
    pub fn min(&self) -> Vec2 {
        self.center - self.shape / 2.0
    }

    /// Box corner with the largest coordinate on both axes.
    pub fn max(&self) -> Vec2 {
        self.center + self.shape / 2.0
    }

    /// The 4 corner vertices.
    pub fn vertices(&self) -> [Vec2; 4] {
        let (lo, hi) = (self.min(), self.max());
        [
            lo,
            Vec2::new(lo.x, hi.y),
            Vec2::new(hi.x, lo.y),
            hi,
        ]
    }

    /// Strict interior test on both axes; points on an edge do not count.
    pub fn contains(&self, p: Vec2) -> bool {
        let (lo, hi) = (self.min(), self.max());
        lo.x < p.x && p.x < hi.x && lo.y < p.y && p.y < hi.y
    }

    /// True if any vertex of `other` lies strictly inside this box.
    pub fn intersect(&self, other: &Rect) -> bool {
        other.vertices().iter().any(|&v| self.contains(v))
    }
}

/// Bidirectional overlap test. Either box may contain a corner of the other
/// without the converse holding, so both directions are checked.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.intersect(b) || b.intersect(a)
}
