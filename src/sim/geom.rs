//! Axis-aligned rectangle geometry
//!
//! Every collidable thing in the game — bunny, snake segments, water
//! regions, collectibles — is an axis-aligned box. The overlap test here is
//! the single collision primitive shared by all higher layers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box with float coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "degenerate rect {w}x{h}");
        Self { x, y, w, h }
    }

    /// Box of the given size with its top-left corner at `pos`
    #[inline]
    pub fn at(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    /// Top-left corner as a vector
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Strict-inequality overlap test: touching edges do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Whether the box lies entirely within a `(0,0)..(w,h)` canvas
    #[inline]
    pub fn within(&self, canvas_w: f32, canvas_h: f32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= canvas_w && self.y + self.h <= canvas_h
    }
}
