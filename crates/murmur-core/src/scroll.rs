//! Scroll State - drag-driven scroll offset for the reply viewport
//!
//! Convention: offset=0 shows the top of the reply, offset=max shows its end.
//! The offset is always clamped to `[0, max_offset]`.

use tracing::trace;

use crate::geometry::Rect;

/// Largest valid offset for the given content and viewport heights
pub fn max_offset(content_height: f32, viewport_height: f32) -> f32 {
    (content_height - viewport_height).max(0.0)
}

/// Drag tracking and clamped offset
#[derive(Debug, Clone, Default)]
pub struct ScrollController {
    /// Current scroll offset (0 = top)
    offset: f32,
    /// Pointer y of the previous drag event
    drag_anchor_y: f32,
    /// Whether a drag is in progress
    dragging: bool,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    // =========================================================================
    // Drag Operations
    // =========================================================================

    /// Begin a drag at pointer y
    pub fn on_drag_start(&mut self, y: f32) {
        self.dragging = true;
        self.drag_anchor_y = y;
    }

    /// Move the drag to pointer y and return the new offset.
    ///
    /// Dragging the content up (y decreasing) scrolls further into the reply.
    pub fn on_drag_move(&mut self, y: f32, content_height: f32, viewport_height: f32) -> f32 {
        if !self.dragging {
            return self.offset;
        }

        let delta = y - self.drag_anchor_y;
        self.offset = (self.offset - delta).clamp(0.0, max_offset(content_height, viewport_height));
        self.drag_anchor_y = y;
        trace!(offset = self.offset, delta, "Scroll drag");
        self.offset
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
    }

    // =========================================================================
    // Direct Offset Updates
    // =========================================================================

    /// Scroll by a signed amount (wheel input), clamped like a drag
    pub fn scroll_by(&mut self, amount: f32, content_height: f32, viewport_height: f32) -> f32 {
        self.offset =
            (self.offset + amount).clamp(0.0, max_offset(content_height, viewport_height));
        self.offset
    }

    /// Re-clamp after the content or viewport changed size
    pub fn clamp_to(&mut self, content_height: f32, viewport_height: f32) {
        self.offset = self
            .offset
            .min(max_offset(content_height, viewport_height))
            .max(0.0);
    }

    /// Back to the top, ending any drag
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.dragging = false;
    }
}

/// Scrollbar thumb placement, derived from the offset each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarGeometry {
    /// The full track (same vertical extent as the viewport)
    pub track: Rect,
    /// The thumb inside the track
    pub thumb: Rect,
}

/// Compute the scrollbar for the current offset.
///
/// Returns `None` when the content fits and no scrollbar should be drawn.
pub fn scrollbar_geometry(
    track: Rect,
    offset: f32,
    content_height: f32,
    min_thumb: f32,
) -> Option<ScrollbarGeometry> {
    let viewport_height = track.height;
    let max = max_offset(content_height, viewport_height);
    if max <= 0.0 || viewport_height <= 0.0 {
        return None;
    }

    let thumb_height = (viewport_height * viewport_height / content_height)
        .max(min_thumb)
        .min(viewport_height);
    let thumb_y = track.y + (offset / max) * (viewport_height - thumb_height);

    Some(ScrollbarGeometry {
        track,
        thumb: Rect::new(track.x, thumb_y, track.width, thumb_height),
    })
}
