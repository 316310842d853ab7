//! Shared numeric constants for the resize engine.

// ── Units ───────────────────────────────────────────────────────

/// Multiplier between a unit fraction of the container and a percentage.
pub const PERCENT_SCALE: f64 = 100.0;

// ── Anchoring ───────────────────────────────────────────────────

/// Heights below this (in pixels) scale the horizontal position correction
/// by `height / SHORT_HEIGHT_THRESHOLD_PX`.
///
/// Empirical compatibility shim: very short rotated elements drift sideways
/// without it. It is not derived from the rotation formula.
pub const SHORT_HEIGHT_THRESHOLD_PX: f64 = 60.0;
