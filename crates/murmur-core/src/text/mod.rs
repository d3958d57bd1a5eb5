//! Text measurement and wrapping

mod layout_cache;
mod measure;

pub use layout_cache::{wrap_greedy, TextLayoutCache};
pub use measure::{FixedWidthMeasure, TextMeasure};
