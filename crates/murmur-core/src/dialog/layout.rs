//! Dialog geometry
//!
//! All rectangles the controller and renderer need, computed from the screen
//! size and a `LayoutConfig`. Recomputed on resize, never mutated in between.

use crate::config::LayoutConfig;
use crate::constants;
use crate::geometry::{Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogGeometry {
    pub screen: Size,
    /// Trigger button, anchored to the bottom-right corner
    pub button: Rect,
    /// The whole modal panel
    pub panel: Rect,
    /// Question block at the top of the panel
    pub question: Rect,
    /// Scrollable reply viewport
    pub reply: Rect,
    /// Scroll track along the right edge of the reply viewport
    pub scroll_track: Rect,
    /// Hint caption strip at the bottom of the panel
    pub footer: Rect,
}

impl DialogGeometry {
    pub fn compute(screen: Size, layout: &LayoutConfig) -> Self {
        let button = Rect::new(
            (screen.width - layout.button_width - layout.button_margin).max(0.0),
            (screen.height - layout.button_height - layout.button_margin).max(0.0),
            layout.button_width,
            layout.button_height,
        );

        let panel_height = layout
            .panel_height
            .min(screen.height - layout.panel_top)
            .max(0.0);
        let panel = Rect::new(
            layout.panel_side_margin,
            layout.panel_top,
            (screen.width - layout.panel_side_margin * 2.0).max(0.0),
            panel_height,
        );

        let content = panel.inset(layout.panel_padding);
        let question_height = (constants::dialog::QUESTION_LINES as f32 * layout.line_height)
            .min(content.height);
        let question = Rect::new(content.x, content.y, content.width, question_height);

        let reply_top = (question.bottom() + layout.section_gap).min(content.bottom());
        let footer_height = layout.footer_height.min(content.bottom() - reply_top);
        let reply_height = (content.bottom() - footer_height - reply_top).max(0.0);
        let reply_width = (content.width - layout.scroll_track_width - layout.section_gap).max(0.0);
        let reply = Rect::new(content.x, reply_top, reply_width, reply_height);

        let scroll_track = Rect::new(
            content.right() - layout.scroll_track_width,
            reply_top,
            layout.scroll_track_width,
            reply_height,
        );
        let footer = Rect::new(content.x, reply.bottom(), content.width, footer_height);

        Self {
            screen,
            button,
            panel,
            question,
            reply,
            scroll_track,
            footer,
        }
    }
}
