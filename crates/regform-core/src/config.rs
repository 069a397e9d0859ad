//! Regform configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::signature::PenStyle;
use crate::domain::validation::ValidationPolicy;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegformConfig {
    /// Logging level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Artificial delays
    pub timings: Timings,
    /// Notification display durations
    pub toasts: ToastDurations,
    /// Signature surface geometry
    pub canvas: CanvasConfig,
    /// Validation policy
    pub validation: ValidationPolicy,
}

/// Logging level name (`error`..`trace`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".into())
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Simulated latencies, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay between submit and validation
    pub submission_delay_ms: u64,
    /// Delay between a signature save and the canvas auto-clear
    pub auto_clear_delay_ms: u64,
    /// Minimum time the splash screen stays up
    pub preloader_min_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submission_delay_ms: 1500,
            auto_clear_delay_ms: 1000,
            preloader_min_ms: 2000,
        }
    }
}

impl Timings {
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn auto_clear_delay(&self) -> Duration {
        Duration::from_millis(self.auto_clear_delay_ms)
    }

    pub fn preloader_min(&self) -> Duration {
        Duration::from_millis(self.preloader_min_ms)
    }
}

/// Toast durations, in milliseconds
///
/// Success durations are per form variant and live with the form copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDurations {
    /// Generic submission failure
    pub error_ms: u64,
    /// Signature save / save refused
    pub signature_ms: u64,
    /// Signature clear / undo / auto-clear
    pub info_ms: u64,
}

impl Default for ToastDurations {
    fn default() -> Self {
        Self {
            error_ms: 4000,
            signature_ms: 3000,
            info_ms: 2000,
        }
    }
}

impl ToastDurations {
    pub fn error(&self) -> Duration {
        Duration::from_millis(self.error_ms)
    }

    pub fn signature(&self) -> Duration {
        Duration::from_millis(self.signature_ms)
    }

    pub fn info(&self) -> Duration {
        Duration::from_millis(self.info_ms)
    }
}

/// Signature surface geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub pen: PenStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 200,
            pen: PenStyle::default(),
        }
    }
}

impl CanvasConfig {
    /// Largest accepted width or height, in pixels
    pub const MAX_SIDE: u32 = 4096;

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_side = |side: u32| (1..=Self::MAX_SIDE).contains(&side);
        if !valid_side(self.width) || !valid_side(self.height) {
            return Err(ConfigError::Canvas(format!(
                "{}x{} outside 1..={} per side",
                self.width,
                self.height,
                Self::MAX_SIDE
            )));
        }
        if !(self.pen.width.is_finite() && self.pen.width > 0.0) {
            return Err(ConfigError::Canvas(format!("pen width {} must be positive", self.pen.width)));
        }
        Ok(())
    }
}

impl RegformConfig {
    /// Load from a TOML or JSON file, chosen by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas.validate()
    }

    /// Save to a TOML or JSON file, chosen by extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("cannot encode TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid canvas: {0}")]
    Canvas(String),
}
