//! Layout primitives for placing the bar and its items.

use axisbar_core::{Axis, Size};

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle of `size` with its top-left corner at `(x, y)`.
    #[must_use]
    pub const fn from_size(x: f32, y: f32, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= x || bottom <= y {
            return None;
        }
        Some(Self::new(x, y, right - x, bottom - y))
    }

    /// A rectangle of `size` centered inside this one.
    #[must_use]
    pub fn centered(&self, size: Size) -> Self {
        Self::new(
            self.x + (self.width - size.width) * 0.5,
            self.y + (self.height - size.height) * 0.5,
            size.width,
            size.height,
        )
    }
}

/// Layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Horizontal (left to right).
    #[default]
    Horizontal,
    /// Vertical (top to bottom).
    Vertical,
}

impl From<Axis> for Direction {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::Horizontal,
            Axis::Vertical => Self::Vertical,
        }
    }
}

/// Stacks fixed-size cells along one direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Layout {
    /// Stacking direction.
    pub direction: Direction,
    /// Gap between cells.
    pub gap: f32,
}

impl Layout {
    /// Creates a layout in the given direction with no gap.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self { direction, gap: 0.0 }
    }

    /// Sets the gap between cells.
    #[must_use]
    pub const fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Places `count` cells of `cell` size from the top-left of `bounds`.
    #[must_use]
    pub fn arrange(&self, bounds: Rect, cell: Size, count: usize) -> Vec<Rect> {
        let mut results = Vec::with_capacity(count);
        let (mut x, mut y) = (bounds.x, bounds.y);

        for _ in 0..count {
            results.push(Rect::from_size(x, y, cell));
            match self.direction {
                Direction::Horizontal => x += cell.width + self.gap,
                Direction::Vertical => y += cell.height + self.gap,
            }
        }

        results
    }
}
