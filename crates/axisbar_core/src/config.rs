//! # Bar Configuration
//!
//! Everything that defines a rating bar: item count and size, spacing,
//! quantization, axis, value representation, and the fill transition.
//!
//! Configurations can be built in code with the `with_*` setters or loaded
//! from TOML. Every field is optional in TOML and falls back to the default:
//!
//! ```toml
//! item_count = 5
//! item_spacing = 4.0
//! fill_quantization = "whole_step"
//! axis = "vertical"
//! value_representation = "point"
//!
//! [item_size]
//! width = 32.0
//! height = 32.0
//!
//! [transition]
//! curve = "ease_in_out"
//! duration_secs = 0.25
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RatingError, RatingResult};
use crate::geometry::Size;

/// Orientation of the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Items run left to right, filled from the leading edge.
    #[default]
    Horizontal,
    /// Items run top to bottom, filled from the bottom.
    Vertical,
}

/// How a raw fill ratio snaps to item boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantization {
    /// Exact ratio, no snapping.
    Continuous,
    /// Snap to half items.
    #[default]
    HalfStep,
    /// Snap to whole items.
    WholeStep,
}

impl Quantization {
    /// Number of discrete steps across the whole bar, or `None` when continuous.
    #[must_use]
    pub const fn steps(self, item_count: u32) -> Option<u32> {
        match self {
            Self::Continuous => None,
            Self::HalfStep => Some(item_count.saturating_mul(2)),
            Self::WholeStep => Some(item_count),
        }
    }
}

/// External representation of the bound value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    /// A value in `[0, 1]`.
    #[default]
    Ratio,
    /// A value in `[0, item_count]`.
    Point,
}

/// Timing curve of the fill transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCurve {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow finish.
    #[default]
    EaseOut,
    /// Slow start and finish.
    EaseInOut,
}

/// Fill transition descriptor. The core never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSpec {
    /// Timing curve.
    pub curve: TransitionCurve,
    /// Duration in seconds. Zero means the fill snaps.
    pub duration_secs: f32,
}

impl TransitionSpec {
    /// Default transition duration.
    pub const DEFAULT_DURATION: f32 = 0.16;

    /// Creates a transition spec.
    #[must_use]
    pub const fn new(curve: TransitionCurve, duration_secs: f32) -> Self {
        Self {
            curve,
            duration_secs,
        }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new(TransitionCurve::EaseOut, Self::DEFAULT_DURATION)
    }
}

/// Settings that define a rating bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfiguration {
    /// Number of items in the bar.
    pub item_count: u32,
    /// Size of one item.
    pub item_size: Size,
    /// Gap added after every item along the axis.
    pub item_spacing: f32,
    /// Snapping policy for dragged values.
    pub fill_quantization: Quantization,
    /// Bar orientation.
    pub axis: Axis,
    /// How the value is exposed to the caller.
    pub value_representation: ValueMode,
    /// Whether drags update the value.
    pub interaction_enabled: bool,
    /// Fill transition, `None` for instant updates.
    pub transition: Option<TransitionSpec>,
}

impl Default for BarConfiguration {
    fn default() -> Self {
        Self {
            item_count: 5,
            item_size: Size::square(44.0),
            item_spacing: 0.0,
            fill_quantization: Quantization::HalfStep,
            axis: Axis::Horizontal,
            value_representation: ValueMode::Ratio,
            interaction_enabled: true,
            transition: Some(TransitionSpec::default()),
        }
    }
}

impl BarConfiguration {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item count.
    #[must_use]
    pub const fn with_item_count(mut self, count: u32) -> Self {
        self.item_count = count;
        self
    }

    /// Sets the item size.
    #[must_use]
    pub const fn with_item_size(mut self, size: Size) -> Self {
        self.item_size = size;
        self
    }

    /// Sets the spacing between items.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Sets the quantization mode.
    #[must_use]
    pub const fn with_quantization(mut self, quantization: Quantization) -> Self {
        self.fill_quantization = quantization;
        self
    }

    /// Sets the axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the value representation.
    #[must_use]
    pub const fn with_value_mode(mut self, mode: ValueMode) -> Self {
        self.value_representation = mode;
        self
    }

    /// Enables or disables drag interaction.
    #[must_use]
    pub const fn with_interaction(mut self, enabled: bool) -> Self {
        self.interaction_enabled = enabled;
        self
    }

    /// Sets the fill transition.
    #[must_use]
    pub const fn with_transition(mut self, transition: Option<TransitionSpec>) -> Self {
        self.transition = transition;
        self
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidConfig`] if the item count is zero, the
    /// item size is not strictly positive, or the spacing or transition
    /// duration is negative or non-finite.
    pub fn validate(&self) -> RatingResult<()> {
        if self.item_count == 0 {
            return Err(RatingError::InvalidConfig(
                "item_count must be at least 1".to_string(),
            ));
        }
        if !self.item_size.is_positive() {
            return Err(RatingError::InvalidConfig(format!(
                "item_size must be positive, got {}x{}",
                self.item_size.width, self.item_size.height
            )));
        }
        if !self.item_spacing.is_finite() || self.item_spacing < 0.0 {
            return Err(RatingError::InvalidConfig(format!(
                "item_spacing must be non-negative, got {}",
                self.item_spacing
            )));
        }
        if let Some(transition) = self.transition {
            if !transition.duration_secs.is_finite() || transition.duration_secs < 0.0 {
                return Err(RatingError::InvalidConfig(format!(
                    "transition duration must be non-negative, got {}",
                    transition.duration_secs
                )));
            }
        }
        Ok(())
    }

    /// Length of the bar along its axis: `item_count * (item_size + item_spacing)`.
    #[must_use]
    pub fn bar_extent(&self) -> f32 {
        let item = match self.axis {
            Axis::Horizontal => self.item_size.width,
            Axis::Vertical => self.item_size.height,
        };
        self.item_count as f32 * (item + self.item_spacing)
    }

    /// Thickness of the bar across its axis.
    #[must_use]
    pub fn cross_extent(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.item_size.height,
            Axis::Vertical => self.item_size.width,
        }
    }

    /// Full size of the bar.
    #[must_use]
    pub fn bar_size(&self) -> Size {
        match self.axis {
            Axis::Horizontal => Size::new(self.bar_extent(), self.cross_extent()),
            Axis::Vertical => Size::new(self.cross_extent(), self.bar_extent()),
        }
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::ConfigParse`] on malformed TOML and
    /// [`RatingError::InvalidConfig`] if the parsed values break an invariant.
    pub fn from_toml_str(text: &str) -> RatingResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| RatingError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::ConfigRead`] if the file cannot be read, plus
    /// everything [`BarConfiguration::from_toml_str`] can return.
    pub fn from_toml_file(path: impl AsRef<Path>) -> RatingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RatingError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            items = config.item_count,
            axis = ?config.axis,
            "loaded bar configuration"
        );
        Ok(config)
    }
}
