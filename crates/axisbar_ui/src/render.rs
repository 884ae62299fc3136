//! UI rendering system.
//!
//! Widgets emit [`RenderCommand`]s; the [`UIRenderer`] resolves the clip
//! stack and groups paths that share a clip into batches.

use axisbar_core::Outline;

use crate::layout::Rect;
use crate::style::Color;

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled closed path, in screen coordinates.
    Path {
        /// Outline to fill.
        outline: Outline,
        /// Fill color.
        color: Color,
    },
    /// Scissor rect (clip following commands).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// A run of paths drawn under the same clip.
#[derive(Debug, Clone, Default)]
pub struct UIBatch {
    /// Path commands in this batch.
    pub commands: Vec<RenderCommand>,
    /// Clip rect (if any).
    pub clip: Option<Rect>,
}

/// UI renderer that collects and batches commands.
pub struct UIRenderer {
    /// Clip stack, each entry already intersected with its parent.
    clip_stack: Vec<Rect>,
    /// Batches for the current frame.
    batches: Vec<UIBatch>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clip_stack: Vec::with_capacity(16),
            batches: Vec::with_capacity(16),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.clip_stack.clear();
        self.batches.clear();
    }

    /// Submits widget output, applying clip commands as they arrive.
    pub fn submit(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        for command in commands {
            match command {
                RenderCommand::PushClip { bounds } => self.push_clip(bounds),
                RenderCommand::PopClip => self.pop_clip(),
                path @ RenderCommand::Path { .. } => self.push_path(path),
            }
        }
    }

    /// Pushes a clip rect.
    pub fn push_clip(&mut self, bounds: Rect) {
        // Intersect with current clip if any
        let actual_clip = match self.clip_stack.last() {
            Some(current) => current.intersection(&bounds).unwrap_or(Rect::ZERO),
            None => bounds,
        };
        self.clip_stack.push(actual_clip);
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!("unbalanced PopClip ignored");
        }
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Ends the frame and returns batches for rendering.
    pub fn end_frame(&mut self) -> &[UIBatch] {
        if !self.clip_stack.is_empty() {
            tracing::warn!(depth = self.clip_stack.len(), "frame ended with open clips");
            self.clip_stack.clear();
        }
        &self.batches
    }

    fn push_path(&mut self, path: RenderCommand) {
        let clip = self.current_clip();
        if clip.is_some_and(|c| c.width <= 0.0 || c.height <= 0.0) {
            return;
        }
        match self.batches.last_mut() {
            Some(batch) if batch.clip == clip => batch.commands.push(path),
            _ => self.batches.push(UIBatch {
                commands: vec![path],
                clip,
            }),
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axisbar_core::{generate_star_outline, Size, StarSpec};

    fn path() -> RenderCommand {
        RenderCommand::Path {
            outline: generate_star_outline(Size::square(10.0), &StarSpec::default()).unwrap(),
            color: Color::WHITE,
        }
    }

    #[test]
    fn test_batches_split_on_clip() {
        let mut renderer = UIRenderer::new();
        renderer.begin_frame();

        renderer.submit([
            path(),
            path(),
            RenderCommand::PushClip {
                bounds: Rect::new(0.0, 0.0, 5.0, 10.0),
            },
            path(),
            RenderCommand::PopClip,
        ]);

        let batches = renderer.end_frame();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].commands.len(), 2);
        assert_eq!(batches[0].clip, None);
        assert_eq!(batches[1].clip, Some(Rect::new(0.0, 0.0, 5.0, 10.0)));
    }

    #[test]
    fn test_clip_stack_intersects() {
        let mut renderer = UIRenderer::new();
        renderer.begin_frame();

        renderer.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        renderer.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(renderer.current_clip(), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));

        renderer.pop_clip();
        renderer.pop_clip();
        assert!(renderer.current_clip().is_none());
    }

    #[test]
    fn test_empty_clip_drops_paths() {
        let mut renderer = UIRenderer::new();
        renderer.begin_frame();

        renderer.submit([
            RenderCommand::PushClip { bounds: Rect::ZERO },
            path(),
            RenderCommand::PopClip,
        ]);

        assert!(renderer.end_frame().is_empty());
    }
}
