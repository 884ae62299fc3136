//! # Rating Error Types
//!
//! All errors that can occur while mapping values or building outlines.

use thiserror::Error;

/// Errors that can occur in the rating core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// The bar has no usable length along its axis.
    #[error("degenerate bar extent: {extent}")]
    DegenerateExtent {
        /// The extent that was passed in.
        extent: f32,
    },

    /// A star needs a positive number of points.
    #[error("invalid point count: {0}")]
    InvalidPointCount(f32),

    /// A numeric input was NaN or infinite.
    #[error("non-finite input: {name}")]
    NonFiniteInput {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// Bar configuration violates an invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigRead {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// Configuration file is not valid TOML for a bar configuration.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

/// Result type for rating operations.
pub type RatingResult<T> = Result<T, RatingError>;

/// Rejects NaN and infinities for the named input.
pub(crate) fn ensure_finite(value: f32, name: &'static str) -> RatingResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RatingError::NonFiniteInput { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RatingError::DegenerateExtent { extent: 0.0 };
        assert_eq!(err.to_string(), "degenerate bar extent: 0");

        let err = RatingError::NonFiniteInput { name: "coordinate" };
        assert_eq!(err.to_string(), "non-finite input: coordinate");
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(1.5, "x"), Ok(1.5));
        assert_eq!(
            ensure_finite(f32::NAN, "x"),
            Err(RatingError::NonFiniteInput { name: "x" })
        );
        assert!(ensure_finite(f32::INFINITY, "x").is_err());
    }
}
