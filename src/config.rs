//! Slider configuration.
//!
//! Defaults can be overridden by a sparse TOML file:
//!
//! ```toml
//! slide_duration_ms = 6000   # Time each slide stays active
//! swipe_threshold_px = 40.0  # Touch distance that counts as a swipe
//! autoplay = true            # Start cycling as soon as the slider is shown
//! ```
//!
//! Out of range presentation values are not rejected here: the carousel
//! and the swipe tracker fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::constants::{DEFAULT_SLIDE_DURATION, DEFAULT_SWIPE_THRESHOLD};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    pub slide_duration_ms: u64,
    pub swipe_threshold_px: f32,
    pub autoplay: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: DEFAULT_SLIDE_DURATION.as_millis() as u64,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD,
            autoplay: true,
        }
    }
}

impl SliderConfig {
    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_duration_ms)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded slider config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_slider_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.slide_duration(), Duration::from_millis(6000));
        assert_eq!(config.swipe_threshold_px, 40.0);
        assert!(config.autoplay);
    }

    #[test]
    fn parse_partial_config() {
        let config = SliderConfig::from_toml_str("slide_duration_ms = 2500\n").unwrap();
        assert_eq!(config.slide_duration_ms, 2500);
        assert_eq!(config.swipe_threshold_px, 40.0);
        assert!(config.autoplay);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = SliderConfig::from_toml_str("slide_speed = 3\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("slider.toml");
        fs::write(&path, "swipe_threshold_px = 60.0\nautoplay = false\n").unwrap();

        let config = SliderConfig::load(&path).unwrap();
        assert_eq!(config.swipe_threshold_px, 60.0);
        assert!(!config.autoplay);
        assert_eq!(config.slide_duration_ms, 6000);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = SliderConfig::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
