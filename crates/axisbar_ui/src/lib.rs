//! # AXISBAR UI
//!
//! A headless rating bar: the collaborator that feeds pointer coordinates
//! into [`axisbar_core`] and turns outlines into draw commands.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        FRAME PIPELINE                      │
//! ├────────────────────────────────────────────────────────────┤
//! │  InputState → RatingBar::update → ValueCell → Animation     │
//! │                                                  ↓         │
//! │  UIRenderer ← RenderCommand ← RatingBar::render ←┘         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is two layers of outlines. The foreground layer is clipped to a
//! rectangle proportional to the fill ratio: leading-anchored on horizontal
//! bars, bottom-anchored on vertical ones.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{Animation, Easing};
pub use input::{InputState, PointerButton};
pub use layout::{Direction, Layout, Rect};
pub use render::{RenderCommand, UIBatch, UIRenderer};
pub use style::{Color, RatingStyle};
pub use widget::{RatingBar, ValueCell, Widget, WidgetId, WidgetResponse, WidgetState};
