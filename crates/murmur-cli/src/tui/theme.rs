//! Colors

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub accent_color: Color,
    pub error_color: Color,
    pub scrollbar_bg_color: Color,
    pub button_color: Color,
    pub button_pressed_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_color: Color::Rgb(24, 24, 32),
            border_color: Color::Rgb(90, 90, 120),
            text_color: Color::Rgb(220, 220, 230),
            dim_color: Color::Rgb(120, 120, 140),
            accent_color: Color::Rgb(130, 170, 255),
            error_color: Color::Rgb(240, 110, 110),
            scrollbar_bg_color: Color::Rgb(45, 45, 60),
            button_color: Color::Rgb(70, 110, 200),
            button_pressed_color: Color::Rgb(50, 80, 150),
        }
    }
}
