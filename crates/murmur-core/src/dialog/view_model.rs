//! View model
//!
//! The read-only snapshot a renderer paints each frame. Owns its data so the
//! renderer never borrows the controller.

use crate::geometry::Rect;
use crate::request::ErrorKind;
use crate::scroll::ScrollbarGeometry;

use super::layout::DialogGeometry;
use super::state::InputMode;

/// What the reply area is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCaption {
    AwaitingInput,
    Thinking,
    Reply,
    Error(ErrorKind),
}

/// Button as it should be drawn (scaled while pressed)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonView {
    pub bounds: Rect,
    pub scale: f32,
    pub pressed: bool,
}

/// A wrapped line with its top y in screen coordinates.
///
/// Lines partially scrolled out of the viewport are included; clip to
/// `geometry.reply` when painting.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub visible: bool,
    pub input_mode: InputMode,
    pub button: ButtonView,
    pub geometry: DialogGeometry,
    pub font_size: f32,
    pub line_height: f32,
    /// At most two wrapped question lines
    pub question_lines: Vec<String>,
    /// Reply (or status caption) lines intersecting the viewport
    pub reply_lines: Vec<PositionedLine>,
    /// Total wrapped reply lines, for "n more" style affordances
    pub reply_line_count: usize,
    pub scrollbar: Option<ScrollbarGeometry>,
    pub status: StatusCaption,
    /// Caret blink phase while awaiting input
    pub caret_visible: bool,
    pub hint: &'static str,
    /// Active notices, most recent first
    pub notices: Vec<String>,
}
