//! Synthetic layouts
//!
//! A fixed set of measurements standing in for the DOM. Used by tests and by
//! JS callers that measure elements themselves.

use serde::{Deserialize, Serialize};

use super::LayoutReader;
use crate::error::LayoutError;

/// Layout snapshot with explicit measurements
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StaticLayout {
    /// `None` behaves like a container that could not be located
    pub container_top_offset: Option<f64>,
    /// `None` behaves like a panel that has not been measured yet
    pub panel_height: Option<f64>,
    pub viewport_height: f64,
}

impl StaticLayout {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            container_top_offset: None,
            panel_height: None,
            viewport_height,
        }
    }

    pub fn with_container_top(mut self, top: f64) -> Self {
        self.container_top_offset = Some(top);
        self
    }

    pub fn with_panel_height(mut self, height: f64) -> Self {
        self.panel_height = Some(height);
        self
    }

    /// Simulate the host window moving the container
    pub fn set_container_top(&mut self, top: Option<f64>) {
        self.container_top_offset = top;
    }

    /// Simulate the panel being measured after mount
    pub fn set_panel_height(&mut self, height: Option<f64>) {
        self.panel_height = height;
    }
}

impl LayoutReader for StaticLayout {
    fn container_top_offset(&self) -> Result<f64, LayoutError> {
        self.container_top_offset
            .ok_or_else(|| LayoutError::ElementNotFound("container".to_string()))
    }

    fn panel_height(&self) -> Option<f64> {
        self.panel_height
    }

    fn viewport_height(&self) -> Result<f64, LayoutError> {
        Ok(self.viewport_height)
    }
}
