//! Rotation geometry for keeping a rotated element anchored while it resizes.
//!
//! Elements are positioned by their unrotated top-left corner and rotated
//! about their centre. Screen y points down, so a positive angle turns the
//! element clockwise. Growing such an element from its right/bottom edges
//! moves its centre, which makes the on-screen top-left corner swing away
//! unless top/left are corrected. [`anchor_correction`] computes that
//! correction from two [`anchored_offset`] evaluations.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::SHORT_HEIGHT_THRESHOLD_PX;

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Neither dimension has been set (the "inserted from URL" image case).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unset(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Raise each dimension to at least the corresponding minimum.
    #[must_use]
    pub fn clamp_min(self, min: Dimensions) -> Self {
        Self { width: self.width.max(min.width), height: self.height.max(min.height) }
    }
}

/// Element position. Percent of the container when committed, pixels while
/// a correction is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    #[must_use]
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// A horizontal/vertical offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

/// Rotate the half-size vector `(width / 2, height / 2)` by `radians`.
#[must_use]
pub fn anchored_offset(width: f64, height: f64, radians: f64) -> Offset {
    let (sin, cos) = radians.sin_cos();
    Offset {
        left: (width * cos - height * sin) / 2.0,
        top: (width * sin + height * cos) / 2.0,
    }
}

/// Position change that keeps the unrotated top-left corner fixed on screen
/// when the element goes from `base` to `applied` at the given rotation.
///
/// Exactly zero at zero rotation.
#[must_use]
pub fn anchor_correction(base: Dimensions, applied: Dimensions, radians: f64) -> Offset {
    let before = anchored_offset(base.width, base.height, radians);
    let after = anchored_offset(applied.width, applied.height, radians);
    Offset {
        left: (after.left - before.left) - (applied.width - base.width) / 2.0,
        top: (after.top - before.top) - (applied.height - base.height) / 2.0,
    }
}

/// Apply the short-height shim: below [`SHORT_HEIGHT_THRESHOLD_PX`] the
/// horizontal correction is scaled by `height / SHORT_HEIGHT_THRESHOLD_PX`.
#[must_use]
pub fn scale_for_short_height(correction: Offset, applied_height: f64) -> Offset {
    if applied_height < SHORT_HEIGHT_THRESHOLD_PX {
        Offset { left: correction.left * (applied_height / SHORT_HEIGHT_THRESHOLD_PX), ..correction }
    } else {
        correction
    }
}

/// Where the element's unrotated top-left corner lands on screen, given its
/// pixel position, size and rotation about its centre.
#[must_use]
pub fn anchor_corner(position_px: Position, size: Dimensions, radians: f64) -> Point {
    let half = anchored_offset(size.width, size.height, radians);
    Point {
        x: position_px.left + size.width / 2.0 - half.left,
        y: position_px.top + size.height / 2.0 - half.top,
    }
}
