//! Resize gesture controller.
//!
//! `ResizeController` drives one gesture at a time through
//! `Idle -> Dragging -> Idle`. Each handler validates its input before
//! touching the session, so a rejected call leaves the gesture exactly as it
//! was. Side effects are returned as [`ResizeAction`]s for the host to apply;
//! the controller never renders anything itself.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::ResizeConfig;
use crate::delta::compute_delta;
use crate::error::{Phase, ResizeError, ensure_finite, ensure_non_negative};
use crate::gesture::{GesturePointer, GestureSession, GestureStart, GestureState};
use crate::geometry::{Dimensions, Point, Position, anchor_correction, scale_for_short_height};
use crate::host::{ElementHost, ElementId, TargetId};
use crate::kinds::KindTable;
use crate::units::{Axis, degrees_to_radians, percentage_to_pixels, pixels_to_percentage};

/// Size (and, for rotated elements, position) to show while dragging.
///
/// `top`/`left` are percent of the container and absent when the element is
/// not rotated, in which case its position is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LivePreview {
    pub element: ElementId,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

/// Committed measurement emitted when a gesture ends.
///
/// All values are truncated toward zero. Positions are percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeResult {
    pub element: ElementId,
    pub width: i64,
    pub height: i64,
    pub position_top: i64,
    pub position_left: i64,
}

/// Side effects returned from gesture handlers for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ResizeAction {
    /// A gesture began on `element`.
    ResizeStarted { element: ElementId },
    /// Show the element at a new size (and position).
    LivePreview(LivePreview),
    /// Resize a lockstep sub-element to match.
    PreviewTargetResized { target: TargetId, width: f64, height: f64 },
    /// The gesture ended with this committed measurement.
    ResizeStopped(ResizeResult),
}

/// Orchestrates resize gestures against a caller-supplied kind table.
#[derive(Debug, Default)]
pub struct ResizeController {
    kinds: KindTable,
    state: GestureState,
}

impl ResizeController {
    #[must_use]
    pub fn new(kinds: KindTable) -> Self {
        Self { kinds, state: GestureState::Idle }
    }

    #[must_use]
    pub fn from_config(config: &ResizeConfig) -> Self {
        Self::new(config.kinds.clone())
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.phase() == Phase::Dragging
    }

    /// The active gesture session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.state.session()
    }

    #[must_use]
    pub fn kinds(&self) -> &KindTable {
        &self.kinds
    }

    // --- Gesture handlers ---

    /// Begin a gesture: capture the baseline and resolve sub-element targets.
    ///
    /// # Errors
    ///
    /// `InvalidState` if a gesture is already active; `InvalidInput` or
    /// `UnsupportedEdge` for malformed start data.
    pub fn on_gesture_start(
        &mut self,
        host: &dyn ElementHost,
        start: GestureStart,
    ) -> Result<Vec<ResizeAction>, ResizeError> {
        if self.is_dragging() {
            warn!(element = %start.element, "gesture start while another gesture is active");
            return Err(ResizeError::InvalidState { expected: Phase::Idle, found: Phase::Dragging });
        }

        start.context.validate()?;
        let start_pointer =
            Point::new(ensure_finite("pointer_x", start.pointer.x)?, ensure_finite("pointer_y", start.pointer.y)?);
        ensure_non_negative("width", start.size.width)?;
        ensure_non_negative("height", start.size.height)?;
        let start_position = start.position_percent()?;

        let entry = self.kinds.lookup(&start.kind);
        let base_size = if entry.is_image() && start.size.is_unset() {
            host.rendered_size(start.element).unwrap_or(start.size)
        } else {
            start.size
        };
        ensure_non_negative("rendered_width", base_size.width)?;
        ensure_non_negative("rendered_height", base_size.height)?;

        let overflow_target = entry.overflow_role().and_then(|role| host.overflow_target(start.element, role));
        let preview_target = entry.preview_role().and_then(|role| host.preview_target(start.element, role));

        debug!(
            element = %start.element,
            kind = %start.kind,
            width = base_size.width,
            height = base_size.height,
            angle = start.context.angle_degrees,
            has_overflow_target = overflow_target.is_some(),
            has_preview_target = preview_target.is_some(),
            "resize started"
        );

        let element = start.element;
        self.state = GestureState::Dragging(Box::new(GestureSession {
            element,
            kind: start.kind,
            start_pointer,
            base_size,
            start_position,
            live_position: start_position,
            live_size: base_size,
            overflow_target,
            preview_target,
            context: start.context,
            auto_fit_text: start.auto_fit_text,
        }));

        Ok(vec![ResizeAction::ResizeStarted { element }])
    }

    /// Preview the element for the current pointer position.
    ///
    /// Returns no actions when the requested size would clip the overflow
    /// target's content.
    ///
    /// # Errors
    ///
    /// `InvalidState` when idle; `InvalidInput` for non-finite pointer data.
    pub fn on_gesture_move(
        &mut self,
        host: &dyn ElementHost,
        event: GesturePointer,
    ) -> Result<Vec<ResizeAction>, ResizeError> {
        let GestureState::Dragging(session) = &mut self.state else {
            warn!("gesture move while idle");
            return Err(ResizeError::InvalidState { expected: Phase::Dragging, found: Phase::Idle });
        };

        let requested = requested_size(session, event)?;

        if !session.auto_fit_text {
            if let Some(natural) = session.overflow_target.and_then(|target| host.natural_size(target)) {
                if requested.width < natural.width || requested.height < natural.height {
                    debug!(
                        element = %session.element,
                        requested_width = requested.width,
                        requested_height = requested.height,
                        natural_width = natural.width,
                        natural_height = natural.height,
                        "resize capped at content size"
                    );
                    return Ok(Vec::new());
                }
            }
        }

        let applied = requested.clamp_min(session.context.min_size());
        let position = if session.context.is_rotated() { Some(corrected_position(session, applied)?) } else { None };

        session.live_size = applied;
        if let Some(position) = position {
            session.live_position = position;
        }

        trace!(
            element = %session.element,
            width = applied.width,
            height = applied.height,
            top = position.map(|p| p.top),
            left = position.map(|p| p.left),
            "live preview"
        );

        let mut actions = vec![ResizeAction::LivePreview(LivePreview {
            element: session.element,
            width: applied.width,
            height: applied.height,
            top: position.map(|p| p.top),
            left: position.map(|p| p.left),
        })];
        if let Some(target) = session.preview_target {
            actions.push(ResizeAction::PreviewTargetResized { target, width: applied.width, height: applied.height });
        }
        Ok(actions)
    }

    /// Finish the gesture and emit the committed measurement.
    ///
    /// The size is re-derived from the final pointer with the minimum clamp
    /// only; the position is the one established by the last accepted move.
    ///
    /// # Errors
    ///
    /// `InvalidState` when idle; `InvalidInput` for non-finite pointer data,
    /// in which case the gesture stays active.
    pub fn on_gesture_end(&mut self, event: GesturePointer) -> Result<Vec<ResizeAction>, ResizeError> {
        let GestureState::Dragging(session) = &self.state else {
            warn!("gesture end while idle");
            return Err(ResizeError::InvalidState { expected: Phase::Dragging, found: Phase::Idle });
        };

        let applied = requested_size(session, event)?.clamp_min(session.context.min_size());
        let result = ResizeResult {
            element: session.element,
            width: truncate(applied.width),
            height: truncate(applied.height),
            position_top: truncate(session.live_position.top),
            position_left: truncate(session.live_position.left),
        };

        debug!(
            element = %result.element,
            width = result.width,
            height = result.height,
            position_top = result.position_top,
            position_left = result.position_left,
            "resize stopped"
        );

        self.state = GestureState::Idle;
        Ok(vec![ResizeAction::ResizeStopped(result)])
    }

    /// Abandon the active gesture without committing anything.
    ///
    /// # Errors
    ///
    /// `InvalidState` when idle.
    pub fn cancel(&mut self) -> Result<(), ResizeError> {
        let GestureState::Dragging(session) = &self.state else {
            return Err(ResizeError::InvalidState { expected: Phase::Dragging, found: Phase::Idle });
        };
        debug!(element = %session.element, "resize cancelled");
        self.state = GestureState::Idle;
        Ok(())
    }
}

/// Base size plus the pointer delta, before any clamping.
fn requested_size(session: &GestureSession, event: GesturePointer) -> Result<Dimensions, ResizeError> {
    let ctx = &session.context;
    let delta = compute_delta(session.start_pointer, event.pointer, ctx.angle_degrees, ctx.direction)?;
    Ok(Dimensions::new(session.base_size.width + delta.width, session.base_size.height + delta.height))
}

/// Percent position that keeps the rotated element's corner anchored at `applied` size.
fn corrected_position(session: &GestureSession, applied: Dimensions) -> Result<Position, ResizeError> {
    let ctx = &session.context;
    let (w, h) = (ctx.container_width, ctx.container_height);
    let radians = degrees_to_radians(ctx.angle_degrees);
    let correction = scale_for_short_height(anchor_correction(session.base_size, applied, radians), applied.height);

    let left_px = percentage_to_pixels(Axis::X, session.start_position.left, w, h)? + correction.left;
    let top_px = percentage_to_pixels(Axis::Y, session.start_position.top, w, h)? + correction.top;
    Ok(Position::new(pixels_to_percentage(Axis::Y, top_px, w, h)?, pixels_to_percentage(Axis::X, left_px, w, h)?))
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}
