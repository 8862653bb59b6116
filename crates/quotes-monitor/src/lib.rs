//! Logging setup and terminal rendering.

mod logging;
mod render;

pub use logging::setup_logging;
pub use render::{render_categories, render_outcome, render_quote, EMPTY_COLLECTION};
