//! Configuration
//!
//! `AppConfig` is read from a TOML file. Every field has a default, so a missing
//! file or a partial file is fine; only unreadable or malformed files are errors.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants;
use crate::error::ConfigError;
use crate::keyboard::KeyboardOptions;
use crate::request::ClassifierRule;

/// Remote completion endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Full chat-completions URL
    pub base_url: String,
    pub model: String,
    /// Environment variable the API key is read from
    pub api_key_env: String,
    pub max_tokens: usize,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: constants::ai::DEFAULT_BASE_URL.to_string(),
            model: constants::ai::DEFAULT_MODEL.to_string(),
            api_key_env: constants::ai::DEFAULT_API_KEY_ENV.to_string(),
            max_tokens: constants::ai::MAX_OUTPUT_TOKENS,
            connect_timeout_secs: constants::http::CONNECT_TIMEOUT.as_secs(),
            request_timeout_secs: constants::http::REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl CompletionConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Geometry and text metrics of the overlay, in host units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub button_width: f32,
    pub button_height: f32,
    /// Distance of the button from the bottom-right screen corner
    pub button_margin: f32,
    pub panel_side_margin: f32,
    pub panel_top: f32,
    pub panel_height: f32,
    pub panel_padding: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub scroll_track_width: f32,
    pub min_thumb: f32,
    pub section_gap: f32,
    pub footer_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        use constants::layout::*;
        Self {
            button_width: BUTTON_SIZE,
            button_height: BUTTON_SIZE,
            button_margin: BUTTON_MARGIN,
            panel_side_margin: PANEL_SIDE_MARGIN,
            panel_top: PANEL_TOP,
            panel_height: PANEL_HEIGHT,
            panel_padding: PANEL_PADDING,
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            scroll_track_width: SCROLL_TRACK_WIDTH,
            min_thumb: MIN_THUMB,
            section_gap: SECTION_GAP,
            footer_height: FOOTER_HEIGHT,
        }
    }
}

/// One dialog flavour: what it asks the endpoint and how it looks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub system_prompt: String,
    #[serde(flatten)]
    pub keyboard: KeyboardOptions,
    /// Host-specific geometry; hosts fall back to their own preset when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutConfig>,
    /// Extra failure-classification rules, checked before the built-in table
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error_rules: Vec<ClassifierRule>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            system_prompt: constants::ai::DEFAULT_SYSTEM_PROMPT.to_string(),
            keyboard: KeyboardOptions::default(),
            layout: None,
            error_rules: Vec::new(),
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub dialog: DialogConfig,
}

impl AppConfig {
    /// Default config file location: `{config_dir}/murmur/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::config::CONFIG_DIR_NAME)
                .join(constants::config::CONFIG_FILE_NAME)
        })
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path or the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
