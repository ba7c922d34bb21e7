//! Axis-aligned rectangles for the paddle, ball and blocks
//!
//! Rectangles are plain values rebuilt from position and size whenever they
//! are needed, so nothing holds on to another entity's rectangle.
//! Screen space: x grows right, y grows down.

use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle whose bottom edge is centered on `(center_x, bottom)`
    pub fn from_midbottom(center_x: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self::new(center_x - width / 2.0, bottom - height, width, height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.center_x(), self.top + self.height / 2.0)
    }

    /// Strict overlap; rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Closed containment: points on any edge are inside
    pub fn contains_point(&self, point: DVec2) -> bool {
        (self.left..=self.right()).contains(&point.x)
            && (self.top..=self.bottom()).contains(&point.y)
    }

    /// Corner picked by a horizontal and vertical side (-1 = left/top, 1 = right/bottom)
    pub fn corner(&self, sx: i8, sy: i8) -> DVec2 {
        let x = if sx < 0 { self.left } else { self.right() };
        let y = if sy < 0 { self.top } else { self.bottom() };
        DVec2::new(x, y)
    }
}
