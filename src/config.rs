//! Runtime tunables for the gesture pipeline.
//!
//! Loaded once at startup (defaults or a JSON file) and treated as
//! immutable for the lifetime of the session.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Gesture pipeline configuration.
///
/// `smoothing` is the damping divisor of the cursor filter: the filter
/// weight is `1 / smoothing`, so larger values trade responsiveness for
/// stability. `pinch_threshold` is in capture-image pixels and therefore
/// scales with camera resolution, not display resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    /// Capture frame width in pixels.
    pub capture_width: f64,
    /// Capture frame height in pixels.
    pub capture_height: f64,
    /// Inset of the active region from each frame edge, in pixels.
    pub frame_margin: f64,
    /// Cursor damping divisor; the filter weight is `1 / smoothing`.
    pub smoothing: f64,
    /// Minimum interval between two clicks of the same button.
    pub click_cooldown_ms: u64,
    /// Fingertip pinch distance below which a click candidate fires.
    pub pinch_threshold: f64,
    /// How long a frame source may block before the loop rechecks its
    /// stop signal.
    pub frame_timeout_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            capture_width: 640.0,
            capture_height: 480.0,
            frame_margin: 100.0,
            smoothing: 7.0,
            click_cooldown_ms: 300,
            pinch_threshold: 40.0,
            frame_timeout_ms: 2000,
        }
    }
}

impl GestureConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture_width <= 0.0 || self.capture_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "capture size {}x{} must be positive",
                self.capture_width, self.capture_height
            )));
        }
        if self.frame_margin < 0.0
            || self.frame_margin * 2.0 >= self.capture_width
            || self.frame_margin * 2.0 >= self.capture_height
        {
            return Err(ConfigError::Invalid(format!(
                "frame margin {} leaves no active region in a {}x{} frame",
                self.frame_margin, self.capture_width, self.capture_height
            )));
        }
        if self.smoothing < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "smoothing {} must be at least 1",
                self.smoothing
            )));
        }
        if self.pinch_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "pinch threshold {} must be positive",
                self.pinch_threshold
            )));
        }
        Ok(())
    }

    pub fn click_cooldown(&self) -> Duration {
        Duration::from_millis(self.click_cooldown_ms)
    }

    pub fn frame_timeout(&self) -> Duration {
        Duration::from_millis(self.frame_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GestureConfig::default();
        assert_eq!(config.capture_width, 640.0);
        assert_eq!(config.capture_height, 480.0);
        assert_eq!(config.frame_margin, 100.0);
        assert_eq!(config.smoothing, 7.0);
        assert_eq!(config.click_cooldown(), Duration::from_millis(300));
        assert_eq!(config.pinch_threshold, 40.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_margin_must_leave_active_region() {
        let config = GestureConfig {
            frame_margin: 240.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_smoothing_below_one_rejected() {
        let config = GestureConfig {
            smoothing: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_json_fills_defaults() {
        let config: GestureConfig =
            serde_json::from_str(r#"{"smoothing": 5.0, "pinchThreshold": 30.0}"#).unwrap();
        assert_eq!(config.smoothing, 5.0);
        assert_eq!(config.pinch_threshold, 30.0);
        assert_eq!(config.capture_width, 640.0);
    }
}
