//! # AXISBAR Core
//!
//! The computational heart of the rating bar. Two independent, pure
//! components:
//!
//! - **Value mapping** - pointer coordinate along the bar to a clamped,
//!   quantized fill value ([`map_coordinate_to_value`])
//! - **Star outlines** - parametric star polygon fitted to a frame
//!   ([`generate_star_outline`])
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI COLLABORATOR                      │
//! │   owns the value cell, the bar geometry, the renderer     │
//! └──────────────┬──────────────────────────────┬────────────┘
//!                │ coordinate                   │ frame + StarSpec
//!                ▼                              ▼
//!        ┌───────────────┐              ┌────────────────┐
//!        │  value mapper │              │ star generator │
//!        └───────┬───────┘              └───────┬────────┘
//!                ▼                              ▼
//!          Ratio | Point                     Outline
//! ```
//!
//! The two components never call each other and hold no state. Identical
//! inputs always produce bit-identical outputs.
//!
//! ## Example
//!
//! ```rust
//! use axisbar_core::{
//!     generate_star_outline, map_coordinate_to_value, BarConfiguration, Quantization, Size,
//!     StarSpec,
//! };
//!
//! let config = BarConfiguration::new().with_quantization(Quantization::Continuous);
//! let value = map_coordinate_to_value(110.0, config.bar_extent(), &config).unwrap();
//! assert!((value - 0.5).abs() < 1e-6);
//!
//! let outline = generate_star_outline(Size::square(44.0), &StarSpec::new(5.0, 0.8)).unwrap();
//! assert!(outline.is_closed());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod star;
pub mod value;

pub use config::{Axis, BarConfiguration, Quantization, TransitionCurve, TransitionSpec, ValueMode};
pub use error::{RatingError, RatingResult};
pub use geometry::{Point, Size};
pub use star::{generate_star_outline, Outline, StarSpec};
pub use value::{from_ratio, map_coordinate_to_value, quantize, to_ratio};
