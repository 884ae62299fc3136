//! # Value Mapping
//!
//! Turns a pointer coordinate along the bar into the bound value.
//!
//! ```text
//! coordinate ──► raw ratio ──► quantize ──► clamp [0,1] ──► Ratio | Point
//!                (axis)        (steps+1)
//! ```
//!
//! Vertical bars fill from the bottom, so their coordinate is inverted
//! against the extent before dividing.
//!
//! Snapping uses `floor((steps + 1) * r) / steps`. The extra step widens
//! every bucket slightly compared to `floor(steps * r) / steps`, so a drag
//! reaches the next item a little earlier than its geometric boundary.

use crate::config::{Axis, BarConfiguration, Quantization, ValueMode};
use crate::error::{ensure_finite, RatingError, RatingResult};

/// Maps a pointer coordinate to the bound value.
///
/// `coordinate` is measured from the leading edge (horizontal) or from the
/// top (vertical) in the same units as `bar_extent`. The result is expressed
/// in the configuration's [`ValueMode`] and always lies in `[0, 1]` or
/// `[0, item_count]`.
///
/// # Errors
///
/// - [`RatingError::DegenerateExtent`] if `bar_extent` is not a positive
///   finite number.
/// - [`RatingError::NonFiniteInput`] if `coordinate` is NaN or infinite.
/// - [`RatingError::InvalidConfig`] if the configuration has no items.
pub fn map_coordinate_to_value(
    coordinate: f32,
    bar_extent: f32,
    config: &BarConfiguration,
) -> RatingResult<f32> {
    if !bar_extent.is_finite() || bar_extent <= 0.0 {
        return Err(RatingError::DegenerateExtent { extent: bar_extent });
    }
    let coordinate = ensure_finite(coordinate, "coordinate")?;
    if config.item_count == 0 {
        return Err(RatingError::InvalidConfig(
            "item_count must be at least 1".to_string(),
        ));
    }

    let raw = match config.axis {
        Axis::Horizontal => coordinate / bar_extent,
        Axis::Vertical => (bar_extent - coordinate) / bar_extent,
    };
    let ratio = quantize(raw, config.fill_quantization, config.item_count);

    Ok(from_ratio(ratio, config))
}

/// Snaps a raw ratio to the quantization grid and clamps it to `[0, 1]`.
///
/// NaN maps to `0.0`. Applying this twice gives the same result as once.
#[must_use]
pub fn quantize(ratio: f32, quantization: Quantization, item_count: u32) -> f32 {
    if ratio.is_nan() {
        return 0.0;
    }

    let snapped = match quantization.steps(item_count) {
        Some(steps) if steps > 0 => {
            let steps = steps as f32;
            ((steps + 1.0) * ratio).floor() / steps
        }
        _ => ratio,
    };

    snapped.clamp(0.0, 1.0)
}

/// Converts an externally held value to a fill ratio in `[0, 1]`.
///
/// Used to size the fill mask when the value was assigned directly rather
/// than produced by a drag.
#[must_use]
pub fn to_ratio(value: f32, config: &BarConfiguration) -> f32 {
    let ratio = match config.value_representation {
        ValueMode::Ratio => value,
        ValueMode::Point => value / config.item_count as f32,
    };
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Expresses a fill ratio in the configuration's value representation.
#[must_use]
pub fn from_ratio(ratio: f32, config: &BarConfiguration) -> f32 {
    match config.value_representation {
        ValueMode::Ratio => ratio,
        ValueMode::Point => ratio * config.item_count as f32,
    }
}
