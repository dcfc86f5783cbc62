//! Axis-aligned box geometry shared by ships, aliens and bolts
//!
//! A box is stored as its center plus full width/height, matching the way
//! sprites are positioned on screen (y grows upward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.height / 2.0
    }

    /// Check if a point lies inside the box (edges included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        let half = self.half_extents();
        d.x <= half.x && d.y <= half.y
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.left(), self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }

    /// True if any corner of `other` lies inside this box
    ///
    /// This is the hit test used for bolts: a thin bolt that passes fully
    /// through a target without a corner inside it does not count.
    pub fn contains_any_corner(&self, other: &Bounds) -> bool {
        other.corners().iter().any(|&c| self.contains_point(c))
    }
}
