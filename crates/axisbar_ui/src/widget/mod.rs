//! Widget system for UI components.

mod binding;
mod core;
mod rating_bar;

pub use binding::ValueCell;
pub use self::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use rating_bar::RatingBar;
