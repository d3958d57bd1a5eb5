//! Render components

mod dialog;
mod notices;
mod scrollbars;

pub use dialog::{render_button, render_dialog};
pub use notices::render_notices;
