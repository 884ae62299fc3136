//! Pointer input for widget interaction.
//!
//! Only one pointer is tracked. Edges (pressed, released) last for one frame;
//! the held state persists until release.

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, or a touch.
    Primary,
    /// Right mouse button.
    Secondary,
}

impl PointerButton {
    const fn mask(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
        }
    }
}

/// Pointer state for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Current pointer X position.
    pub pointer_x: f32,
    /// Current pointer Y position.
    pub pointer_y: f32,
    /// Pointer X position last frame.
    prev_x: f32,
    /// Pointer Y position last frame.
    prev_y: f32,
    /// Buttons pressed this frame.
    pressed: u8,
    /// Buttons released this frame.
    released: u8,
    /// Buttons currently held.
    held: u8,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame edges.
    pub fn begin_frame(&mut self) {
        self.prev_x = self.pointer_x;
        self.prev_y = self.pointer_y;
        self.pressed = 0;
        self.released = 0;
    }

    /// Moves the pointer.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    /// Records a button press.
    pub fn press(&mut self, button: PointerButton) {
        self.pressed |= button.mask();
        self.held |= button.mask();
    }

    /// Records a button release.
    pub fn release(&mut self, button: PointerButton) {
        self.released |= button.mask();
        self.held &= !button.mask();
    }

    /// Returns true if the button went down this frame.
    #[must_use]
    pub fn was_pressed(&self, button: PointerButton) -> bool {
        (self.pressed & button.mask()) != 0
    }

    /// Returns true if the button went up this frame.
    #[must_use]
    pub fn was_released(&self, button: PointerButton) -> bool {
        (self.released & button.mask()) != 0
    }

    /// Returns true if the button is currently held.
    #[must_use]
    pub fn is_held(&self, button: PointerButton) -> bool {
        (self.held & button.mask()) != 0
    }

    /// Returns the pointer movement since last frame.
    #[must_use]
    pub fn pointer_delta(&self) -> (f32, f32) {
        (self.pointer_x - self.prev_x, self.pointer_y - self.prev_y)
    }
}
