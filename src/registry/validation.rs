//! Shared validation helpers for tool handlers.
//!
//! Centralizes numeric and shape checks so every tool reports out-of-range
//! options the same way, before anything reaches the host.

use crate::build::gradient::{ColorStop, OpacityStop};
use crate::error::BridgeError;
use crate::model::Point;

fn finite(value: f64, name: &str) -> Result<(), BridgeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BridgeError::validation(format!("{name} must be finite")))
    }
}

/// Validate that a value is finite and positive.
pub fn validate_positive(value: f64, name: &str) -> Result<(), BridgeError> {
    finite(value, name)?;
    if value <= 0.0 {
        return Err(BridgeError::validation(format!(
            "{name} ({value}) must be positive"
        )));
    }
    Ok(())
}

/// Validate that a value is finite and within `[min, max]`.
pub fn validate_range(value: f64, min: f64, max: f64, name: &str) -> Result<(), BridgeError> {
    finite(value, name)?;
    if !(min..=max).contains(&value) {
        return Err(BridgeError::validation(format!(
            "{name} ({value}) must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Validate a percentage in [0, 100].
pub fn validate_percent(value: f64, name: &str) -> Result<(), BridgeError> {
    validate_range(value, 0.0, 100.0, name)
}

/// Validate an integer option within `[min, max]`.
pub fn validate_count(value: u32, min: u32, max: u32, name: &str) -> Result<(), BridgeError> {
    if !(min..=max).contains(&value) {
        return Err(BridgeError::validation(format!(
            "{name} ({value}) must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// At least `min` points, each with finite coordinates.
pub fn validate_points(points: &[Point], min: usize, name: &str) -> Result<(), BridgeError> {
    if points.len() < min {
        return Err(BridgeError::validation(format!(
            "{name} needs at least {min} point(s), got {}",
            points.len()
        )));
    }
    for p in points {
        finite(p.x, name)?;
        finite(p.y, name)?;
    }
    Ok(())
}

/// A gradient needs at least one color stop; every location is a percent.
pub fn validate_stops(
    colors: &[ColorStop],
    opacity: Option<&[OpacityStop]>,
) -> Result<(), BridgeError> {
    if colors.is_empty() {
        return Err(BridgeError::validation("colorStops must not be empty"));
    }
    for stop in colors {
        validate_percent(stop.location, "colorStops.location")?;
        validate_percent(stop.midpoint, "colorStops.midpoint")?;
    }
    for stop in opacity.unwrap_or_default() {
        validate_percent(stop.location, "opacityStops.location")?;
        validate_percent(stop.opacity, "opacityStops.opacity")?;
    }
    Ok(())
}

/// Non-empty after trimming.
pub fn validate_text(value: &str, name: &str) -> Result<(), BridgeError> {
    if value.trim().is_empty() {
        return Err(BridgeError::validation(format!("{name} must not be empty")));
    }
    Ok(())
}
