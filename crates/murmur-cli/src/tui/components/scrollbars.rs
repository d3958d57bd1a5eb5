//! Scrollbar rendering
//!
//! Filled track with a solid thumb, 1 cell wide.
//! Visual: ░ (track) and █ (thumb)

use murmur_core::scroll::ScrollbarGeometry;
use ratatui::{buffer::Buffer, style::Color};

use crate::tui::utils::to_cells;

/// Draw the track and thumb. Positions come from the engine, already clamped.
pub fn render_scrollbar(
    buf: &mut Buffer,
    scrollbar: &ScrollbarGeometry,
    thumb_color: Color,
    track_color: Color,
) {
    let track = to_cells(scrollbar.track);
    if track.height == 0 || track.width == 0 {
        return;
    }

    let thumb_top = scrollbar.thumb.y.round() as i32;
    // At least one cell so the thumb never disappears
    let thumb_bottom = (scrollbar.thumb.bottom().round() as i32).max(thumb_top + 1);

    for y in track.y..track.y + track.height {
        let row = i32::from(y);
        let is_thumb = row >= thumb_top && row < thumb_bottom;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };

        for x in track.x..track.x + track.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_fg(color);
            }
        }
    }
}
