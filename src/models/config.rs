//! Placement configuration
//!
//! Fixed sizes and DOM selectors used by the quick view. Every field has a
//! default, so JS callers and config files only need to list overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Height of a single list row in pixels
pub const ANCHOR_ITEM_HEIGHT: f64 = 47.0;

/// Panel height assumed before the panel has been measured
pub const MAX_PANEL_HEIGHT: f64 = 556.0;

/// Container top offset used when the container element cannot be found
pub const FALLBACK_CONTAINER_TOP: f64 = 50.0;

/// Pointer offset inside the panel: half a row plus margin
pub const DEFAULT_POINTER_OFFSET: f64 = 20.0;

/// Configuration for quick view placement
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Height of a list row (pixels)
    pub anchor_item_height: f64,

    /// Panel height used until a measurement is available (pixels)
    pub max_panel_height: f64,

    /// Container top offset used when the container is missing (pixels)
    pub fallback_container_top: f64,

    /// Pointer offset used as the half-row correction and as the
    /// fallback when no position is known (pixels)
    pub default_pointer_offset: f64,

    /// CSS selector of the scrollable container
    pub container_selector: String,

    /// CSS selector of the panel element
    pub panel_selector: String,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            anchor_item_height: ANCHOR_ITEM_HEIGHT,
            max_panel_height: MAX_PANEL_HEIGHT,
            fallback_container_top: FALLBACK_CONTAINER_TOP,
            default_pointer_offset: DEFAULT_POINTER_OFFSET,
            container_selector: ".quick-view-container".to_string(),
            panel_selector: ".quick-view".to_string(),
        }
    }
}

impl PlacementConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML config file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Reject values the placement math cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        let heights = [
            ("anchor_item_height", self.anchor_item_height),
            ("max_panel_height", self.max_panel_height),
        ];
        for (name, value) in heights {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let offsets = [
            ("fallback_container_top", self.fallback_container_top),
            ("default_pointer_offset", self.default_pointer_offset),
        ];
        for (name, value) in offsets {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.container_selector.trim().is_empty() {
            return Err(ConfigError::Invalid("container_selector is empty".to_string()));
        }
        if self.panel_selector.trim().is_empty() {
            return Err(ConfigError::Invalid("panel_selector is empty".to_string()));
        }

        Ok(())
    }
}
