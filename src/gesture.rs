//! Gesture model: drag context, event payloads, and the per-gesture session.
//!
//! `GestureState` is the state machine tracked between gesture start and
//! gesture end. While dragging it owns a [`GestureSession`] holding every
//! baseline value needed to turn later pointer positions into sizes and
//! positions. A session never outlives its gesture.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::delta::EdgeSet;
use crate::error::{Phase, ResizeError, ensure_finite, ensure_non_negative};
use crate::geometry::{Dimensions, Point, Position};
use crate::host::{ElementId, TargetId};
use crate::kinds::ElementKind;
use crate::units::{Axis, Container, pixels_to_percentage};

/// Element and container facts that hold for a whole drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragContext {
    /// Clockwise element rotation in degrees.
    pub angle_degrees: f64,
    /// Edges dragged by the active handle.
    pub direction: EdgeSet,
    pub min_width: f64,
    pub min_height: f64,
    pub container_width: f64,
    pub container_height: f64,
}

impl DragContext {
    #[must_use]
    pub fn container(&self) -> Container {
        Container::new(self.container_width, self.container_height)
    }

    #[must_use]
    pub fn min_size(&self) -> Dimensions {
        Dimensions::new(self.min_width, self.min_height)
    }

    /// Position corrections only apply to rotated elements.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_rotated(&self) -> bool {
        self.angle_degrees != 0.0
    }

    /// Check every field the controller will compute with.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-finite angle, negative or non-finite
    /// minimums, or an unusable container, and `UnsupportedEdge` for
    /// `left`/`top` directions.
    pub fn validate(&self) -> Result<(), ResizeError> {
        ensure_finite("angle_degrees", self.angle_degrees)?;
        ensure_non_negative("min_width", self.min_width)?;
        ensure_non_negative("min_height", self.min_height)?;
        self.container().validate()?;
        self.direction.ensure_supported()
    }
}

/// Units a committed element position is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionUnit {
    /// Percent of the container (the stored form).
    #[default]
    Percent,
    /// CSS pixels relative to the container origin.
    Pixels,
}

/// Payload for the start of a resize gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureStart {
    pub element: ElementId,
    pub kind: ElementKind,
    /// Screen-space pointer position where the drag began.
    pub pointer: Point,
    /// Stored element size; zero on both axes when never set.
    pub size: Dimensions,
    /// Committed element position.
    pub position: Position,
    #[serde(default)]
    pub position_unit: PositionUnit,
    pub context: DragContext,
    /// Text scales to fit the box, so its natural size never constrains resizing.
    #[serde(default)]
    pub auto_fit_text: bool,
}

impl GestureStart {
    /// Committed position converted to percent of the container.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite coordinates or an unusable container.
    pub fn position_percent(&self) -> Result<Position, ResizeError> {
        let top = ensure_finite("position_top", self.position.top)?;
        let left = ensure_finite("position_left", self.position.left)?;
        match self.position_unit {
            PositionUnit::Percent => Ok(Position::new(top, left)),
            PositionUnit::Pixels => {
                let (w, h) = (self.context.container_width, self.context.container_height);
                Ok(Position::new(
                    pixels_to_percentage(Axis::Y, top, w, h)?,
                    pixels_to_percentage(Axis::X, left, w, h)?,
                ))
            }
        }
    }
}

/// Pointer payload for gesture move and gesture end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GesturePointer {
    pub pointer: Point,
}

impl GesturePointer {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { pointer: Point::new(x, y) }
    }
}

/// Baseline and live values for the gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub element: ElementId,
    pub kind: ElementKind,
    pub start_pointer: Point,
    /// Size the deltas are applied to.
    pub base_size: Dimensions,
    /// Committed position at gesture start, in percent.
    pub start_position: Position,
    /// Position established by the last accepted move, in percent.
    pub live_position: Position,
    /// Size established by the last accepted move.
    pub live_size: Dimensions,
    pub overflow_target: Option<TargetId>,
    pub preview_target: Option<TargetId>,
    pub context: DragContext,
    pub auto_fit_text: bool,
}

/// Gesture state machine: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next gesture start.
    #[default]
    Idle,
    /// A resize handle is being dragged.
    Dragging(Box<GestureSession>),
}

impl GestureState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Dragging(_) => Phase::Dragging,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(&**session),
        }
    }
}
