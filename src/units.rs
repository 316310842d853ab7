//! Pixel/percentage conversions relative to the page container, plus angle units.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use serde::{Deserialize, Serialize};

use crate::consts::PERCENT_SCALE;
use crate::error::{ResizeError, ensure_finite, ensure_positive};

/// Container axis a length is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal; measured against the container width.
    X,
    /// Vertical; measured against the container height.
    Y,
}

/// Size of the page container that positions are relative to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Container extent along `axis`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if that extent is zero, negative, or non-finite.
    pub fn extent(&self, axis: Axis) -> Result<f64, ResizeError> {
        match axis {
            Axis::X => ensure_positive("container_width", self.width),
            Axis::Y => ensure_positive("container_height", self.height),
        }
    }

    /// Check both extents at once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for the first unusable extent.
    pub fn validate(&self) -> Result<(), ResizeError> {
        self.extent(Axis::X)?;
        self.extent(Axis::Y)?;
        Ok(())
    }
}

/// Convert a pixel length along `axis` into a percentage of the container.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-finite length or an unusable container extent.
pub fn pixels_to_percentage(
    axis: Axis,
    pixels: f64,
    container_width: f64,
    container_height: f64,
) -> Result<f64, ResizeError> {
    let pixels = ensure_finite("pixels", pixels)?;
    let extent = Container::new(container_width, container_height).extent(axis)?;
    Ok(pixels / extent * PERCENT_SCALE)
}

/// Convert a percentage of the container along `axis` back into pixels.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-finite percentage or an unusable container extent.
pub fn percentage_to_pixels(
    axis: Axis,
    percentage: f64,
    container_width: f64,
    container_height: f64,
) -> Result<f64, ResizeError> {
    let percentage = ensure_finite("percentage", percentage)?;
    let extent = Container::new(container_width, container_height).extent(axis)?;
    Ok(percentage / PERCENT_SCALE * extent)
}

#[must_use]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[must_use]
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}
