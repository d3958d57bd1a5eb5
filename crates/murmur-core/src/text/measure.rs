//! Text measurement
//!
//! The engine never measures text itself; the host provides a [`TextMeasure`]
//! backed by its real font metrics (canvas text metrics, terminal cell widths).

/// Width of a run of text at a font size, in host units
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        (**self).measure(text, font_size)
    }
}

/// Fixed advance per character, as a ratio of font size
///
/// Good enough for monospace fonts and for hosts without real metrics.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMeasure {
    pub char_width_ratio: f32,
}

impl FixedWidthMeasure {
    /// Typical monospace advance
    pub const MONO: FixedWidthMeasure = FixedWidthMeasure {
        char_width_ratio: 0.6,
    };

    pub fn new(char_width_ratio: f32) -> Self {
        Self { char_width_ratio }
    }
}

impl Default for FixedWidthMeasure {
    fn default() -> Self {
        Self::MONO
    }
}

impl TextMeasure for FixedWidthMeasure {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.char_width_ratio
    }
}
