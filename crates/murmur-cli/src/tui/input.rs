//! Terminal keyboard
//!
//! Stands in for an on-screen keyboard: while open, typed characters go into
//! a single-line buffer drawn inside the question area. The controller opens
//! and closes it through `KeyboardService`; the app edits the buffer.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use murmur_core::{KeyboardOptions, KeyboardService};

/// Single-line editor state
#[derive(Debug, Default)]
pub struct InputLine {
    pub open: bool,
    pub buffer: String,
    pub options: KeyboardOptions,
}

impl InputLine {
    /// Insert a character, refusing once `max_length` characters are typed
    pub fn insert(&mut self, ch: char) -> bool {
        if !self.open || ch.is_control() {
            return false;
        }
        if self.buffer.chars().count() >= self.options.max_length {
            return false;
        }
        self.buffer.push(ch);
        true
    }

    /// Insert pasted text up to the length limit, newlines become spaces
    pub fn paste(&mut self, text: &str) {
        for ch in text.chars() {
            let ch = if ch == '\n' || ch == '\r' { ' ' } else { ch };
            if !self.insert(ch) {
                break;
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.open {
            self.buffer.pop();
        }
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }
}

/// Shared handle: one clone goes to the controller, one stays with the app
#[derive(Debug, Clone, Default)]
pub struct TerminalKeyboard {
    line: Rc<RefCell<InputLine>>,
}

impl TerminalKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> Ref<'_, InputLine> {
        self.line.borrow()
    }

    pub fn is_open(&self) -> bool {
        self.line.borrow().open
    }

    pub fn insert(&self, ch: char) -> bool {
        self.line.borrow_mut().insert(ch)
    }

    pub fn paste(&self, text: &str) {
        self.line.borrow_mut().paste(text);
    }

    pub fn backspace(&self) {
        self.line.borrow_mut().backspace();
    }

    /// Current buffer contents, for handing to the controller on confirm
    pub fn text(&self) -> String {
        self.line.borrow().buffer.clone()
    }
}

impl KeyboardService for TerminalKeyboard {
    fn open(&mut self, options: &KeyboardOptions) {
        let mut line = self.line.borrow_mut();
        line.open = true;
        line.buffer.clear();
        line.options = options.clone();
        tracing::debug!(max_length = options.max_length, "Keyboard opened");
    }

    fn close(&mut self) {
        let mut line = self.line.borrow_mut();
        line.open = false;
        line.buffer.clear();
    }
}
