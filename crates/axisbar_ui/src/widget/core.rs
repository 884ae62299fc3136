//! Core widget types and traits.

use crate::input::InputState;
use crate::layout::Rect;
use crate::render::RenderCommand;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget accepts input.
    pub const ENABLED: u32 = 1 << 1;
    /// Pointer is over the widget.
    pub const HOVERED: u32 = 1 << 2;
    /// A drag started on the widget is in progress.
    pub const PRESSED: u32 = 1 << 3;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 4;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::ENABLED | Self::DIRTY_RENDER);

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle (set by layout).
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            flags: WidgetFlags::DEFAULT,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget accepts input.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Returns true if the widget is hovered.
    #[inline]
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.has(WidgetFlags::HOVERED)
    }

    /// Returns true if the widget is pressed.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.flags.has(WidgetFlags::PRESSED)
    }

    /// Returns true if the widget needs redraw.
    #[inline]
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.flags.has(WidgetFlags::DIRTY_RENDER)
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.assign(WidgetFlags::DIRTY_RENDER, true);
    }

    /// Clears the redraw flag once the frame has been submitted.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.flags.assign(WidgetFlags::DIRTY_RENDER, false);
    }
}

/// Response from widget update.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// Widget value changed.
    pub changed: bool,
    /// A drag started on the widget this frame.
    pub drag_started: bool,
    /// A drag ended this frame.
    pub drag_ended: bool,
    /// Pointer entered the widget this frame.
    pub hovered: bool,
    /// Pointer left the widget this frame.
    pub unhovered: bool,
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles input and advances animations.
    ///
    /// Called every frame, even without input events.
    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse;

    /// Generates render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Returns the minimum size of this widget.
    fn min_size(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Returns the preferred size of this widget.
    fn preferred_size(&self) -> (f32, f32) {
        self.min_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let mut flags = WidgetFlags::DEFAULT;
        assert!(flags.has(WidgetFlags::VISIBLE));
        assert!(!flags.has(WidgetFlags::HOVERED));

        flags.assign(WidgetFlags::HOVERED, true);
        assert!(flags.has(WidgetFlags::HOVERED));

        flags.assign(WidgetFlags::ENABLED, false);
        assert!(!flags.has(WidgetFlags::ENABLED));
    }

    #[test]
    fn test_dirty_cycle() {
        let mut state = WidgetState::new(WidgetId::new(7));
        assert!(state.needs_render());

        state.clear_dirty();
        assert!(!state.needs_render());

        state.mark_dirty();
        assert!(state.needs_render());
        assert_eq!(state.id.raw(), 7);
    }
}
