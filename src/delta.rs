//! Pointer-delta to size-delta conversion in the element's local frame.
//!
//! The user drags along screen axes while width and height run along the
//! element's own (possibly rotated) axes, so the raw screen delta is rotated
//! by the negative element angle before it is read as a size change.

#[cfg(test)]
#[path = "delta_test.rs"]
mod delta_test;

use serde::{Deserialize, Serialize};

use crate::error::{ResizeError, ensure_finite};
use crate::geometry::Point;
use crate::units::degrees_to_radians;

/// An element edge that a resize handle can drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// The set of edges being dragged by the active handle.
///
/// Only `right` and `bottom` are supported; the top-left corner is the
/// implicit anchor of every resize.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSet {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeSet {
    /// Right edge only.
    pub const RIGHT: Self = Self { top: false, right: true, bottom: false, left: false };
    /// Bottom edge only.
    pub const BOTTOM: Self = Self { top: false, right: false, bottom: true, left: false };
    /// The bottom-right corner handle.
    pub const BOTTOM_RIGHT: Self = Self { top: false, right: true, bottom: true, left: false };

    /// Build a set from a list of edges.
    #[must_use]
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut set = Self::default();
        for edge in edges {
            match edge {
                Edge::Top => set.top = true,
                Edge::Right => set.right = true,
                Edge::Bottom => set.bottom = true,
                Edge::Left => set.left = true,
            }
        }
        set
    }

    /// Reject edges this engine cannot drag.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedEdge` naming the first of `left`/`top` that is set.
    pub fn ensure_supported(&self) -> Result<(), ResizeError> {
        if self.left {
            return Err(ResizeError::UnsupportedEdge(Edge::Left));
        }
        if self.top {
            return Err(ResizeError::UnsupportedEdge(Edge::Top));
        }
        Ok(())
    }
}

/// Size change in the element's local frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub width: f64,
    pub height: f64,
}

/// Compute the width/height change for a pointer moving from `start` to
/// `current` while dragging `edges` of an element rotated by `angle_degrees`.
///
/// Inactive edges contribute zero.
///
/// # Errors
///
/// Returns `InvalidInput` for non-finite coordinates or angle, and
/// `UnsupportedEdge` when `left` or `top` is requested.
pub fn compute_delta(start: Point, current: Point, angle_degrees: f64, edges: EdgeSet) -> Result<Delta, ResizeError> {
    edges.ensure_supported()?;
    let dx = ensure_finite("pointer_x", current.x)? - ensure_finite("start_x", start.x)?;
    let dy = ensure_finite("pointer_y", current.y)? - ensure_finite("start_y", start.y)?;
    let angle = ensure_finite("angle_degrees", angle_degrees)?;

    let (sin, cos) = degrees_to_radians(angle).sin_cos();
    let local_x = dx * cos + dy * sin;
    let local_y = -dx * sin + dy * cos;

    Ok(Delta {
        width: if edges.right { local_x } else { 0.0 },
        height: if edges.bottom { local_y } else { 0.0 },
    })
}
