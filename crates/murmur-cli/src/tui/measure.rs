//! Terminal text measurement
//!
//! One unit per display column, so wide CJK characters count as two.

use murmur_core::TextMeasure;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        UnicodeWidthStr::width(text) as f32 * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_chars_take_two_cells() {
        assert_eq!(CellMeasure.measure("abc", 1.0), 3.0);
        assert_eq!(CellMeasure.measure("日本", 1.0), 4.0);
    }
}
