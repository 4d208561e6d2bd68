//! Collision detection between the bird and pipe pieces
//!
//! The bird is a circle, each pipe piece an axis-aligned rectangle in screen
//! space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Closest point on (or in) the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Touching edges do not count as overlap, so a bird skimming a pipe lip
/// survives.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}
