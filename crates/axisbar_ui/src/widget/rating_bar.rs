//! The rating bar widget.
//!
//! ```text
//!   horizontal                         vertical
//!   ┌────┬────┬────┬────┬────┐         ┌────┐
//!   │ ★  │ ★  │ ★  │ ☆  │ ☆  │         │ ☆  │  ← top, value 1.0 edge
//!   └────┴────┴────┴────┴────┘         │ ★  │
//!   ├── mask ───────┤                  │ ★  │  ┬ mask grows
//!   leading edge = 0                   └────┘  ┴ from the bottom
//! ```
//!
//! Each item sits centered in a cell of `item_size + item_spacing` along the
//! axis. A press inside the bar starts a drag with no minimum distance, so a
//! plain tap also sets the value. Every pointer sample of the drag, release
//! included, goes through the core mapper and is written to the value cell.

use axisbar_core::{
    generate_star_outline, map_coordinate_to_value, to_ratio, Axis, BarConfiguration,
    RatingResult, Size, StarSpec,
};

use super::binding::ValueCell;
use super::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::animation::Animation;
use crate::input::{InputState, PointerButton};
use crate::layout::{Direction, Layout, Rect};
use crate::render::RenderCommand;
use crate::style::{Color, RatingStyle};

/// Drag-driven rating bar.
#[derive(Debug, Clone)]
pub struct RatingBar {
    state: WidgetState,
    config: BarConfiguration,
    background: StarSpec,
    foreground: StarSpec,
    style: RatingStyle,
    value: ValueCell,
    fill: Animation,
    dragging: bool,
}

impl RatingBar {
    /// Creates a bar bound to `value`, laid out at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(id: WidgetId, config: BarConfiguration, value: ValueCell) -> RatingResult<Self> {
        config.validate()?;

        let mut state = WidgetState::new(id);
        state.rect = Rect::from_size(0.0, 0.0, config.bar_size());
        state
            .flags
            .assign(WidgetFlags::ENABLED, config.interaction_enabled);

        let fill = Animation::from_transition(to_ratio(value.get(), &config), config.transition);

        Ok(Self {
            state,
            config,
            background: StarSpec::default(),
            foreground: StarSpec::default(),
            style: RatingStyle::default(),
            value,
            fill,
            dragging: false,
        })
    }

    /// Uses `spec` for both layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot produce an outline.
    pub fn with_shape(self, spec: StarSpec) -> RatingResult<Self> {
        self.with_shapes(spec, spec)
    }

    /// Uses separate shapes for the unfilled and filled layers.
    ///
    /// # Errors
    ///
    /// Returns an error if either spec cannot produce an outline.
    pub fn with_shapes(mut self, background: StarSpec, foreground: StarSpec) -> RatingResult<Self> {
        background.validate()?;
        foreground.validate()?;
        self.background = background;
        self.foreground = foreground;
        self.state.mark_dirty();
        Ok(self)
    }

    /// Sets the layer colors.
    #[must_use]
    pub fn with_style(mut self, style: RatingStyle) -> Self {
        self.style = style;
        self.state.mark_dirty();
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BarConfiguration {
        &self.config
    }

    /// Returns the bound value cell.
    #[must_use]
    pub fn value(&self) -> &ValueCell {
        &self.value
    }

    /// Fill ratio currently on screen, mid-transition values included.
    #[must_use]
    pub fn fill_ratio(&self) -> f32 {
        self.fill.value()
    }

    /// Fill ratio the transition is heading to.
    #[must_use]
    pub fn target_ratio(&self) -> f32 {
        self.fill.target()
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Moves the bar so its top-left corner is at `(x, y)`.
    pub fn layout(&mut self, x: f32, y: f32) {
        self.state.rect = Rect::from_size(x, y, self.config.bar_size());
        self.state.mark_dirty();
    }

    /// Screen rectangle of every item, in order along the axis.
    #[must_use]
    pub fn item_rects(&self) -> Vec<Rect> {
        let size = self.config.item_size;
        let spacing = self.config.item_spacing;
        let cell = match self.config.axis {
            Axis::Horizontal => Size::new(size.width + spacing, size.height),
            Axis::Vertical => Size::new(size.width, size.height + spacing),
        };

        Layout::new(Direction::from(self.config.axis))
            .arrange(self.state.rect, cell, self.config.item_count as usize)
            .into_iter()
            .map(|cell| cell.centered(size))
            .collect()
    }

    /// Clip rectangle of the filled layer for `ratio`.
    #[must_use]
    pub fn fill_mask(&self, ratio: f32) -> Rect {
        let bounds = self.state.rect;
        let ratio = ratio.clamp(0.0, 1.0);
        match self.config.axis {
            Axis::Horizontal => Rect::new(bounds.x, bounds.y, bounds.width * ratio, bounds.height),
            Axis::Vertical => {
                let height = bounds.height * ratio;
                Rect::new(bounds.x, bounds.bottom() - height, bounds.width, height)
            }
        }
    }

    /// Picks up values assigned to the cell from outside the widget.
    fn sync_external(&mut self) {
        let ratio = to_ratio(self.value.get(), &self.config);
        if (ratio - self.fill.target()).abs() > f32::EPSILON {
            tracing::trace!(widget = self.state.id.raw(), ratio, "external value assigned");
            self.fill.set_target(ratio);
            self.state.mark_dirty();
        }
    }

    /// Maps the pointer to a value and writes it to the cell.
    fn commit(&mut self, input: &InputState) -> bool {
        let bounds = self.state.rect;
        let coordinate = match self.config.axis {
            Axis::Horizontal => input.pointer_x - bounds.x,
            Axis::Vertical => input.pointer_y - bounds.y,
        };

        match map_coordinate_to_value(coordinate, self.config.bar_extent(), &self.config) {
            Ok(value) => {
                let previous = self.value.replace(value);
                self.fill.set_target(to_ratio(value, &self.config));
                let changed = previous.to_bits() != value.to_bits();
                if changed {
                    tracing::debug!(widget = self.state.id.raw(), value, "rating changed");
                    self.state.mark_dirty();
                }
                changed
            }
            Err(err) => {
                tracing::warn!(widget = self.state.id.raw(), %err, "drag sample ignored");
                false
            }
        }
    }

    fn push_layer(
        &self,
        commands: &mut Vec<RenderCommand>,
        items: &[Rect],
        spec: &StarSpec,
        color: Color,
    ) {
        let outline = match generate_star_outline(self.config.item_size, spec) {
            Ok(outline) => outline,
            Err(err) => {
                tracing::warn!(widget = self.state.id.raw(), %err, "layer skipped");
                return;
            }
        };

        commands.extend(items.iter().map(|item| RenderCommand::Path {
            outline: outline.translated(item.x, item.y),
            color,
        }));
    }
}

impl Widget for RatingBar {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        let hovered = self.state.rect.contains(input.pointer_x, input.pointer_y);
        if hovered != self.state.is_hovered() {
            self.state.flags.assign(WidgetFlags::HOVERED, hovered);
            response.hovered = hovered;
            response.unhovered = !hovered;
        }

        self.sync_external();

        if self.state.is_enabled() {
            if !self.dragging && hovered && input.was_pressed(PointerButton::Primary) {
                self.dragging = true;
                self.state.flags.assign(WidgetFlags::PRESSED, true);
                response.drag_started = true;
            }

            if self.dragging {
                response.changed = self.commit(input);

                if !input.is_held(PointerButton::Primary) {
                    self.dragging = false;
                    self.state.flags.assign(WidgetFlags::PRESSED, false);
                    response.drag_ended = true;
                }
            }
        } else if self.dragging {
            self.dragging = false;
            self.state.flags.assign(WidgetFlags::PRESSED, false);
            response.drag_ended = true;
        }

        self.fill.update(dt);
        if !self.fill.is_complete() {
            self.state.mark_dirty();
        }

        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }

        let items = self.item_rects();
        self.push_layer(commands, &items, &self.background, self.style.background);
        commands.push(RenderCommand::PushClip {
            bounds: self.fill_mask(self.fill.value()),
        });
        self.push_layer(commands, &items, &self.foreground, self.style.foreground);
        commands.push(RenderCommand::PopClip);
    }

    fn min_size(&self) -> (f32, f32) {
        let size = self.config.bar_size();
        (size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axisbar_core::{Quantization, ValueMode};

    fn bar(config: BarConfiguration) -> RatingBar {
        RatingBar::new(WidgetId::new(1), config.with_transition(None), ValueCell::new(0.0)).unwrap()
    }

    #[test]
    fn test_item_rects_center_in_cells() {
        let bar = bar(BarConfiguration::new().with_spacing(10.0));
        let items = bar.item_rects();

        assert_eq!(items.len(), 5);
        assert_eq!(items[0], Rect::new(5.0, 0.0, 44.0, 44.0));
        assert_eq!(items[1], Rect::new(59.0, 0.0, 44.0, 44.0));
    }

    #[test]
    fn test_fill_mask_horizontal() {
        let mut bar = bar(BarConfiguration::new());
        bar.layout(10.0, 20.0);

        assert_eq!(bar.fill_mask(0.5), Rect::new(10.0, 20.0, 110.0, 44.0));
        assert_eq!(bar.fill_mask(2.0).width, 220.0);
    }

    #[test]
    fn test_fill_mask_vertical_grows_from_bottom() {
        let bar = bar(BarConfiguration::new().with_axis(Axis::Vertical));

        let mask = bar.fill_mask(0.25);
        assert_eq!(mask, Rect::new(0.0, 165.0, 44.0, 55.0));
        assert_eq!(mask.bottom(), 220.0);
    }

    #[test]
    fn test_press_starts_drag_and_commits() {
        let mut bar = bar(BarConfiguration::new().with_quantization(Quantization::Continuous));
        let mut input = InputState::new();
        input.move_to(55.0, 10.0);
        input.press(PointerButton::Primary);

        let response = bar.update(&input, 0.016);

        assert!(response.drag_started);
        assert!(response.changed);
        assert!(bar.is_dragging());
        assert!(bar.state().is_pressed());
        assert!((bar.value().get() - 0.25).abs() < 1e-6);
        assert!((bar.fill_ratio() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut bar = bar(BarConfiguration::new());
        let mut input = InputState::new();
        input.move_to(300.0, 10.0);
        input.press(PointerButton::Primary);

        let response = bar.update(&input, 0.016);
        assert!(!response.drag_started);
        assert!(!bar.is_dragging());
        assert_eq!(bar.value().get(), 0.0);
    }

    #[test]
    fn test_point_mode_writes_points() {
        let config = BarConfiguration::new()
            .with_quantization(Quantization::WholeStep)
            .with_value_mode(ValueMode::Point);
        let mut bar = bar(config);
        let mut input = InputState::new();
        input.move_to(150.0, 10.0);
        input.press(PointerButton::Primary);

        bar.update(&input, 0.016);
        // floor(6 * 150/220) = 4 items
        assert!((bar.value().get() - 4.0).abs() < 1e-5);
        assert!((bar.fill_ratio() - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_render_layers_in_order() {
        let bar = bar(BarConfiguration::new());
        let mut commands = Vec::new();
        bar.render(&mut commands);

        assert_eq!(commands.len(), 5 + 1 + 5 + 1);
        assert!(matches!(commands[5], RenderCommand::PushClip { .. }));
        assert!(matches!(commands[11], RenderCommand::PopClip));
        match &commands[0] {
            RenderCommand::Path { color, outline } => {
                assert_eq!(*color, Color::GRAY);
                assert!(outline.is_closed());
            }
            other => panic!("expected path, got {other:?}"),
        }
        match &commands[6] {
            RenderCommand::Path { color, .. } => assert_eq!(*color, Color::ACCENT),
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_shape_rejected() {
        let result = bar(BarConfiguration::new()).with_shape(StarSpec::new(0.0, 1.0));
        assert!(result.is_err());
    }
}
