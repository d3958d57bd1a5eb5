//! Test doubles for the engine's collaborators

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::keyboard::{KeyboardOptions, KeyboardService};
use crate::text::TextMeasure;
use crate::transport::{CompletionRequest, CompletionTransport, RequestTicket};

/// Fixed-width measure that counts how often it is called
#[derive(Debug, Default)]
pub struct CountingMeasure {
    char_width: f32,
    calls: Cell<usize>,
}

impl CountingMeasure {
    pub fn new(char_width: f32) -> Self {
        Self {
            char_width,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextMeasure for CountingMeasure {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        self.calls.set(self.calls.get() + 1);
        text.chars().count() as f32 * self.char_width * font_size
    }
}

/// Records every request; completions are delivered by the test by hand.
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    log: Rc<RefCell<Vec<(RequestTicket, CompletionRequest)>>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<(RequestTicket, CompletionRequest)> {
        self.log.borrow().clone()
    }

    pub fn last_ticket(&self) -> Option<RequestTicket> {
        self.log.borrow().last().map(|(ticket, _)| *ticket)
    }
}

impl CompletionTransport for RecordingTransport {
    fn send(&mut self, ticket: RequestTicket, request: CompletionRequest) {
        self.log.borrow_mut().push((ticket, request));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardCall {
    Open,
    Close,
}

/// Records open/close calls. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingKeyboard {
    calls: Rc<RefCell<Vec<KeyboardCall>>>,
    last_options: Rc<RefCell<Option<KeyboardOptions>>>,
}

impl RecordingKeyboard {
    pub fn calls(&self) -> Vec<KeyboardCall> {
        self.calls.borrow().clone()
    }

    pub fn last_options(&self) -> Option<KeyboardOptions> {
        self.last_options.borrow().clone()
    }
}

impl KeyboardService for RecordingKeyboard {
    fn open(&mut self, options: &KeyboardOptions) {
        self.calls.borrow_mut().push(KeyboardCall::Open);
        *self.last_options.borrow_mut() = Some(options.clone());
    }

    fn close(&mut self) {
        self.calls.borrow_mut().push(KeyboardCall::Close);
    }
}
