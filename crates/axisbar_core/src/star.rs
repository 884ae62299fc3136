//! # Star Outlines
//!
//! Parametric star polygons fitted to a rectangle.
//!
//! Vertices alternate between an outer ellipse (the frame's half extents) and
//! an inner ellipse scaled by `inner_ratio / 2`, starting at the top and
//! advancing by `pi / point_count`. Radii are scaled per axis, so a star in a
//! non-square frame stretches instead of shrinking to the short side.
//!
//! Fractional point counts are allowed. They leave an unequal final wedge,
//! closed off by one extra vertex.
//!
//! Most stars are not vertically symmetric: the top point reaches the frame
//! edge while the lowest vertex stops short of it. The finished outline is
//! shifted down by half the gap so the top and bottom margins match.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, RatingError, RatingResult};
use crate::geometry::{Point, Size};

/// Shape parameters of a star.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarSpec {
    /// Number of points. May be fractional.
    pub point_count: f32,
    /// Inner radius relative to the outer one, before halving. Not clamped.
    pub inner_ratio: f32,
}

impl StarSpec {
    /// Creates a star spec.
    #[must_use]
    pub const fn new(point_count: f32, inner_ratio: f32) -> Self {
        Self {
            point_count,
            inner_ratio,
        }
    }

    /// Checks that these parameters can produce an outline.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NonFiniteInput`] for NaN or infinite fields and
    /// [`RatingError::InvalidPointCount`] when the point count is not positive.
    pub fn validate(&self) -> RatingResult<()> {
        let count = ensure_finite(self.point_count, "point_count")?;
        ensure_finite(self.inner_ratio, "inner_ratio")?;
        if count <= 0.0 {
            return Err(RatingError::InvalidPointCount(count));
        }
        Ok(())
    }

    /// Interpolates both parameters, `t = 0` gives `self`, `t = 1` gives `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.point_count + (other.point_count - self.point_count) * t,
            self.inner_ratio + (other.inner_ratio - self.inner_ratio) * t,
        )
    }
}

impl Default for StarSpec {
    fn default() -> Self {
        Self::new(5.0, 1.0)
    }
}

/// A closed polygonal sub-path.
///
/// Holds the start point, every emitted vertex, then the start point again.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    /// All points in drawing order, closing point included.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Only the emitted vertices, without the start and closing points.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        if self.points.len() < 2 {
            return &[];
        }
        &self.points[1..self.points.len() - 1]
    }

    /// Number of points, closing point included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the outline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the last point coincides with the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Returns a copy shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            points: self.points.iter().map(|p| p.offset(dx, dy)).collect(),
        }
    }

    /// Raw bytes of the point list, two `f32` per point.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}

/// Builds the outline of a star fitted to a `size` frame anchored at the origin.
///
/// # Errors
///
/// - [`RatingError::NonFiniteInput`] if a frame dimension or spec field is
///   NaN or infinite.
/// - [`RatingError::InvalidPointCount`] if the point count is not positive.
pub fn generate_star_outline(size: Size, spec: &StarSpec) -> RatingResult<Outline> {
    ensure_finite(size.width, "width")?;
    let height = ensure_finite(size.height, "height")?;
    spec.validate()?;

    let center = size.center();
    let point_angle = PI / spec.point_count;
    let inner = Point::new(
        center.x * spec.inner_ratio * 0.5,
        center.y * spec.inner_ratio * 0.5,
    );

    // Truncation is intended: the fractional part becomes the correction vertex.
    let total = (spec.point_count * 2.0) as usize;
    let correction = usize::from(spec.point_count.fract() != 0.0);

    let mut angle = -FRAC_PI_2;
    let (sin, cos) = angle.sin_cos();
    let start = Point::new(center.x * cos, center.y * sin);

    let mut points = Vec::with_capacity(total + correction + 2);
    points.push(start);

    let mut bottom = 0.0_f32;
    for corner in 0..total + correction {
        let (sin, cos) = angle.sin_cos();
        let radius = if corner % 2 == 0 { center } else { inner };
        let vertex = Point::new(radius.x * cos, radius.y * sin);
        bottom = bottom.max(vertex.y);
        points.push(vertex);
        angle += point_angle;
    }
    points.push(start);

    let dx = center.x;
    let dy = center.y + (height * 0.5 - bottom) * 0.5;
    for p in &mut points {
        *p = p.offset(dx, dy);
    }

    Ok(Outline { points })
}
