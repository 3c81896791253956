//! Court-space geometry primitives.
//!
//! All authored coordinates live in a normalized 1000x1000 court space,
//! independent of the template the diagram is drawn against; renderers map
//! court space onto their own surface.

use serde::{Deserialize, Serialize};

/// Lower bound of the authoring coordinate space (both axes).
pub const COURT_MIN: f32 = 0.0;
/// Upper bound of the authoring coordinate space (both axes).
pub const COURT_MAX: f32 = 1000.0;

/// 2D point in court space.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both coordinates finite and inside the court bounds.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && (COURT_MIN..=COURT_MAX).contains(&self.x)
            && (COURT_MIN..=COURT_MAX).contains(&self.y)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
