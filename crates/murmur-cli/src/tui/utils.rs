//! Cell conversion and string helpers

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Convert an engine rectangle (in cells) to a ratatui `Rect`
pub fn to_cells(rect: murmur_core::Rect) -> Rect {
    let clamp = |v: f32| v.round().clamp(0.0, u16::MAX as f32) as u16;
    Rect::new(
        clamp(rect.x),
        clamp(rect.y),
        clamp(rect.width),
        clamp(rect.height),
    )
}

/// Truncate to `max_width` display columns, ending in `…` when cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    let total: usize = text
        .chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
