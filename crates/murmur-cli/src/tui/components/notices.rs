//! Notice rendering
//!
//! Small bordered boxes in the top-right corner with a draining progress bar.

use std::time::Instant;

use murmur_core::dialog::{Notice, NoticeQueue};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

use crate::tui::theme::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Notice width
const NOTICE_WIDTH: u16 = 30;

/// Notice height (including borders)
const NOTICE_HEIGHT: u16 = 3;

/// Gap between notices
const NOTICE_GAP: u16 = 1;

/// Render notices in the top-right corner
pub fn render_notices(buf: &mut Buffer, area: Rect, queue: &NoticeQueue, theme: &Theme) {
    if queue.is_empty() || area.width < NOTICE_WIDTH + 2 {
        return;
    }

    let now = Instant::now();
    let start_x = area.x + area.width - NOTICE_WIDTH - 1;

    for (i, notice) in queue.visible().enumerate() {
        let y = area.y + 1 + (i as u16 * (NOTICE_HEIGHT + NOTICE_GAP));
        if y + NOTICE_HEIGHT > area.y + area.height {
            break;
        }
        let notice_area = Rect::new(start_x, y, NOTICE_WIDTH, NOTICE_HEIGHT);
        render_notice(buf, notice_area, notice, now, theme);
    }
}

fn render_notice(buf: &mut Buffer, area: Rect, notice: &Notice, now: Instant, theme: &Theme) {
    let color = theme.accent_color;
    let border_style = Style::default().fg(color);
    let right = area.x + area.width - 1;
    let bottom = area.y + area.height - 1;
    let content_y = area.y + 1;

    for x in (area.x + 1)..right {
        if let Some(cell) = buf.cell_mut((x, content_y)) {
            cell.set_char(' ').set_bg(theme.bg_color);
        }
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_char('─').set_style(border_style);
        }
    }

    for (x, y, ch) in [
        (area.x, area.y, '╭'),
        (right, area.y, '╮'),
        (area.x, content_y, '│'),
        (right, content_y, '│'),
        (area.x, bottom, '╰'),
        (right, bottom, '╯'),
    ] {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(border_style);
        }
    }

    // Bottom border doubles as the remaining-time bar
    let progress_width = ((area.width - 2) as f32 * notice.progress_at(now)) as u16;
    for (i, x) in ((area.x + 1)..right).enumerate() {
        if let Some(cell) = buf.cell_mut((x, bottom)) {
            if (i as u16) < progress_width {
                cell.set_char('━').set_fg(color);
            } else {
                cell.set_char('─').set_fg(theme.dim_color);
            }
        }
    }

    let mut cx = area.x + 2;
    let message = truncate_ellipsis(&notice.message, (area.width - 4) as usize);
    for ch in message.chars() {
        if let Some(cell) = buf.cell_mut((cx, content_y)) {
            cell.set_char(ch)
                .set_fg(theme.text_color)
                .set_bg(theme.bg_color);
        }
        cx += UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
    }
}
