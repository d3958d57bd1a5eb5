//! Keyboard service
//!
//! The host's text-entry facility (a platform soft keyboard, a modal prompt, a
//! terminal input line). The controller only opens and closes it; confirmed or
//! dismissed input comes back through `DialogController::on_keyboard_confirm`
//! and `DialogController::on_keyboard_dismissed`.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Options passed when the keyboard is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardOptions {
    pub max_length: usize,
    pub placeholder: String,
    pub confirm_label: String,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            max_length: constants::dialog::MAX_INPUT_LENGTH,
            placeholder: constants::dialog::PLACEHOLDER.to_string(),
            confirm_label: constants::dialog::CONFIRM_LABEL.to_string(),
        }
    }
}

pub trait KeyboardService {
    fn open(&mut self, options: &KeyboardOptions);
    /// Force-hide the keyboard; must be safe to call when it is already closed
    fn close(&mut self);
}
