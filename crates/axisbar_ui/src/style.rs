//! Colors for the two rating layers.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Neutral gray for unfilled items.
    pub const GRAY: Self = Self::rgba(0.56, 0.56, 0.58, 1.0);
    /// Accent blue for filled items.
    pub const ACCENT: Self = Self::rgba(0.0, 0.48, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

/// Fill colors of a rating bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingStyle {
    /// Color of the unfilled layer.
    pub background: Color,
    /// Color of the filled layer.
    pub foreground: Color,
}

impl Default for RatingStyle {
    fn default() -> Self {
        Self {
            background: Color::GRAY,
            foreground: Color::ACCENT,
        }
    }
}
