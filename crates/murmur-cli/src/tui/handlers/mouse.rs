//! Mouse event handling
//!
//! Cells map one-to-one onto engine units. Cell `(c, r)` covers
//! `[c, c+1) x [r, r+1)`, so a click is sent as the cell centre.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use murmur_core::Point;

use crate::tui::app::App;

/// Lines per wheel notch
const WHEEL_LINES: f32 = 3.0;

fn to_point(mouse: &MouseEvent) -> Point {
    Point::new(f32::from(mouse.column) + 0.5, f32::from(mouse.row) + 0.5)
}

impl App {
    /// Handle clicks, drags and wheel scrolling
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let point = to_point(&mouse);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.controller.on_pointer_down(point, &mut self.button);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.controller.on_pointer_move(point);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.controller.on_pointer_up(&mut self.button);
            }
            MouseEventKind::ScrollDown => {
                let step = WHEEL_LINES * self.controller.line_height();
                self.controller.on_wheel(point, step);
            }
            MouseEventKind::ScrollUp => {
                let step = WHEEL_LINES * self.controller.line_height();
                self.controller.on_wheel(point, -step);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::tests::test_app;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use murmur_core::dialog::InputMode;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_button_then_outside() {
        let mut app = test_app();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 72, 27));
        assert!(app.button.pressed);
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 72, 27));
        assert!(!app.button.pressed);
        assert_eq!(app.controller.state().input_mode, InputMode::AwaitingKeyboard);
        assert!(app.keyboard.is_open());

        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(!app.controller.state().visible);
        assert!(!app.keyboard.is_open());
    }

    #[test]
    fn test_click_just_right_of_panel_closes() {
        let mut app = test_app();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 72, 27));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 72, 27));
        assert!(app.controller.state().visible);

        // Panel cells are columns 4..=75 and rows 2..=21
        let right = app.controller.geometry().panel.right() as u16;
        assert_eq!(right, 76);
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), right, 10));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), right, 10));
        assert!(!app.controller.state().visible);
    }

    #[test]
    fn test_click_below_panel_closes() {
        let mut app = test_app();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 72, 27));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 72, 27));

        let bottom = app.controller.geometry().panel.bottom() as u16;
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, bottom));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, bottom));
        assert!(!app.controller.state().visible);
    }

    #[test]
    fn test_click_just_right_of_button_misses() {
        let mut app = test_app();
        // Button cells are columns 69..=78
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 79, 27));
        assert!(!app.button.pressed);
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 79, 27));
        assert!(!app.controller.state().visible);

        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 78, 28));
        assert!(app.button.pressed);
    }

    #[test]
    fn test_wheel_scrolls_long_reply() {
        let mut app = test_app();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 72, 27));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 72, 27));
        app.controller.on_keyboard_confirm(&"long question ".repeat(14));
        app.poll_completions();
        // Narrow and short enough that the echoed reply overflows
        app.resize(30, 14);

        app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 8));
        assert!(app.controller.scroll_offset() > 0.0);
        app.handle_mouse_event(mouse(MouseEventKind::ScrollUp, 10, 8));
        assert_eq!(app.controller.scroll_offset(), 0.0);
    }
}
