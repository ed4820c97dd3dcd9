//! Engine configuration.
//!
//! Every field has a default from [`crate::constants`], so a config file only
//! needs to list the values it overrides.

use crate::constants::*;
use crate::error::ConfigError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Screen-space travel a press must exceed before it becomes a drag
    pub drag_threshold: f64,
    pub duplicate_offset: f64,
    pub copy_suffix: String,
    /// Total margin kept around the content by fit-to-screen
    pub fit_padding: f64,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    pub default_node_width: f64,
    pub default_node_height: f64,
    pub grow_animation_ms: u64,
    pub connection_animation_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            drag_threshold: DRAG_THRESHOLD,
            duplicate_offset: DUPLICATE_OFFSET,
            copy_suffix: COPY_SUFFIX.to_string(),
            fit_padding: FIT_PADDING,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            default_node_width: DEFAULT_NODE_SIZE.0,
            default_node_height: DEFAULT_NODE_SIZE.1,
            grow_animation_ms: GROW_ANIMATION_MS,
            connection_animation_ms: CONNECTION_ANIMATION_MS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_scale.is_nan() || self.min_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.max_scale.is_nan() || self.max_scale < self.min_scale {
            return Err(ConfigError::Invalid(format!(
                "max_scale {} is below min_scale {}",
                self.max_scale, self.min_scale
            )));
        }
        if self.drag_threshold < 0.0 {
            return Err(ConfigError::Invalid("drag_threshold must not be negative".into()));
        }
        if self.wheel_zoom_in <= 0.0 || self.wheel_zoom_out <= 0.0 {
            return Err(ConfigError::Invalid("wheel zoom factors must be positive".into()));
        }
        if self.default_node_width <= 0.0 || self.default_node_height <= 0.0 {
            return Err(ConfigError::Invalid("default node size must be positive".into()));
        }
        Ok(())
    }

    pub fn grow_animation(&self) -> Duration {
        Duration::from_millis(self.grow_animation_ms)
    }

    pub fn connection_animation(&self) -> Duration {
        Duration::from_millis(self.connection_animation_ms)
    }
}
