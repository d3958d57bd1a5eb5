//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for completion requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Whole-request timeout; surfaced to the dialog as a `Timeout` failure
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// User agent sent with every completion request
    pub const USER_AGENT: &str = "Murmur/0.1";
}

/// Completion endpoint configuration
pub mod ai {
    /// Default OpenAI-compatible chat completions endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

    /// Default model ID
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Environment variable holding the API key
    pub const DEFAULT_API_KEY_ENV: &str = "MURMUR_API_KEY";

    /// Default maximum output tokens
    pub const MAX_OUTPUT_TOKENS: usize = 1024;

    /// System prompt sent with every question unless configured otherwise
    pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a friendly companion living inside a small game. \
Answer the player's question briefly and warmly, in plain text without markdown.";
}

/// Dialog behaviour and captions
pub mod dialog {
    /// Maximum characters accepted from the keyboard
    pub const MAX_INPUT_LENGTH: usize = 200;

    /// Placeholder shown by the keyboard service
    pub const PLACEHOLDER: &str = "Type a question...";

    /// Label of the keyboard's confirm key
    pub const CONFIRM_LABEL: &str = "Send";

    /// Number of question lines shown above the reply
    pub const QUESTION_LINES: usize = 2;

    /// Render scale of the button while it is held down
    pub const PRESSED_SCALE: f32 = 0.9;

    /// Ticks between caret blinks (about 500ms at 60fps)
    pub const CARET_BLINK_TICKS: u64 = 30;

    pub const CAPTION_AWAITING_INPUT: &str = "awaiting input";
    pub const CAPTION_THINKING: &str = "thinking";
    pub const HINT_CLOSE: &str = "tap outside to close";
    pub const NOTICE_ENTER_CONTENT: &str = "enter content";
}

/// Default geometry, in pixels of a phone-sized canvas
pub mod layout {
    pub const BUTTON_SIZE: f32 = 80.0;
    pub const BUTTON_MARGIN: f32 = 10.0;
    pub const PANEL_SIDE_MARGIN: f32 = 50.0;
    pub const PANEL_TOP: f32 = 100.0;
    pub const PANEL_HEIGHT: f32 = 320.0;
    pub const PANEL_PADDING: f32 = 20.0;
    pub const FONT_SIZE: f32 = 14.0;
    pub const LINE_HEIGHT: f32 = 20.0;
    pub const SCROLL_TRACK_WIDTH: f32 = 6.0;
    pub const MIN_THUMB: f32 = 20.0;
    /// Gap between the question block and the reply viewport
    pub const SECTION_GAP: f32 = 10.0;
    /// Height reserved at the panel bottom for the hint caption
    pub const FOOTER_HEIGHT: f32 = 24.0;
}

/// Notice configuration
pub mod notice {
    use super::*;

    /// How long a transient notice stays visible
    pub const DURATION: Duration = Duration::from_millis(1500);

    /// Maximum number of visible notices
    pub const MAX_VISIBLE: usize = 3;
}

/// Config file location
pub mod config {
    /// Config directory name under the platform config dir
    pub const CONFIG_DIR_NAME: &str = "murmur";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
