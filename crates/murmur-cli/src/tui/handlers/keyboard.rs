//! Keyboard event handling
//!
//! While the input line is open, keys edit it; Enter confirms and Esc
//! dismisses. Otherwise Enter presses the button, Esc closes the dialog and
//! `q` quits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use murmur_core::Point;

use crate::tui::app::App;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.keyboard.is_open() {
            self.handle_input_key(key.code);
        } else {
            self.handle_idle_key(key.code);
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let text = self.keyboard.text();
                self.controller.on_keyboard_confirm(&text);
            }
            KeyCode::Esc => self.controller.on_keyboard_dismissed(),
            KeyCode::Backspace => self.keyboard.backspace(),
            KeyCode::Char(ch) => {
                self.keyboard.insert(ch);
            }
            _ => {}
        }
    }

    fn handle_idle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.press_button(),
            KeyCode::Esc => self.controller.dismiss(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                let panel = self.controller.geometry().panel;
                let center = Point::new(
                    panel.x + panel.width / 2.0,
                    panel.y + panel.height / 2.0,
                );
                let line = self.controller.line_height();
                let page = self.controller.geometry().reply.height;
                let delta = match code {
                    KeyCode::Up => -line,
                    KeyCode::Down => line,
                    KeyCode::PageUp => -page,
                    _ => page,
                };
                self.controller.on_wheel(center, delta);
            }
            _ => {}
        }
    }

    /// Simulate a tap on the button
    fn press_button(&mut self) {
        let bounds = self.button.bounds;
        let center = Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);
        self.controller.on_pointer_down(center, &mut self.button);
        self.controller.on_pointer_up(&mut self.button);
    }
}
