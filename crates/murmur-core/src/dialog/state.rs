//! Dialog state
//!
//! Plain data mutated only by `DialogController`.

use crate::geometry::Rect;

/// Which interactive element currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveRegion {
    #[default]
    None,
    /// The trigger button is held down
    Button,
    /// The keyboard is open for the question
    InputField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Closed,
    /// Keyboard open, waiting for confirm or dismiss
    AwaitingKeyboard,
    /// Question sent; showing progress or the reply
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    pub visible: bool,
    pub active_region: ActiveRegion,
    pub input_mode: InputMode,
    pub question_text: String,
    pub reply_text: String,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh visible session waiting for the keyboard
    pub(crate) fn open(&mut self) {
        *self = Self {
            visible: true,
            active_region: ActiveRegion::Button,
            input_mode: InputMode::AwaitingKeyboard,
            question_text: String::new(),
            reply_text: String::new(),
        };
    }

    pub(crate) fn close(&mut self) {
        self.visible = false;
        self.input_mode = InputMode::Closed;
        self.active_region = ActiveRegion::None;
    }
}

/// The trigger button, owned by the screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonState {
    pub bounds: Rect,
    pub pressed: bool,
}

impl ButtonState {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            pressed: false,
        }
    }
}
