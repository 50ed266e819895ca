//! Defaults for a new canvas.

use crate::shapes::{SerializableColor, Text};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid config: {0}")]
    Parse(String),
}

/// Canvas configuration.
///
/// Every field has a default, so a config file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Logical width of the drawing area.
    pub width: f64,
    /// Logical height of the drawing area.
    pub height: f64,
    /// Color the surface is cleared to before painting.
    pub background: SerializableColor,
    /// Initial stroke color.
    pub stroke_color: SerializableColor,
    /// Initial stroke width.
    pub stroke_width: f64,
    /// Initial font size for text.
    pub font_size: f64,
    /// Initial content for text.
    pub text_content: String,
    /// Maximum undo entries kept (None = unbounded).
    pub max_history: Option<usize>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background: SerializableColor::white(),
            stroke_color: SerializableColor::black(),
            stroke_width: 5.0,
            font_size: Text::DEFAULT_FONT_SIZE,
            text_content: String::new(),
            max_history: None,
        }
    }
}

impl CanvasConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}
