//! Live layout queries
//!
//! The placement math never touches the DOM directly. It reads container
//! offset, panel height and viewport height through a [`LayoutReader`], so
//! the same code runs against the browser ([`dom::DomLayout`]) and against
//! synthetic layouts in tests ([`StaticLayout`]).
//!
//! Reads are never cached: the container moves when the host window is
//! resized or maximized.

pub mod dom;
pub mod synthetic;

pub use dom::DomLayout;
pub use synthetic::StaticLayout;

use crate::error::LayoutError;
use crate::models::PlacementConfig;

/// Source of live layout measurements
pub trait LayoutReader {
    /// Viewport top to scrollable container top
    fn container_top_offset(&self) -> Result<f64, LayoutError>;

    /// Rendered panel height, `None` until the panel has been measured
    fn panel_height(&self) -> Option<f64>;

    /// Current viewport height
    fn viewport_height(&self) -> Result<f64, LayoutError>;
}

impl<R: LayoutReader + ?Sized> LayoutReader for &R {
    fn container_top_offset(&self) -> Result<f64, LayoutError> {
        (**self).container_top_offset()
    }

    fn panel_height(&self) -> Option<f64> {
        (**self).panel_height()
    }

    fn viewport_height(&self) -> Result<f64, LayoutError> {
        (**self).viewport_height()
    }
}

/// Layout measurements with fallbacks applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub container_top_offset: f64,
    pub panel_height: f64,
    pub viewport_height: f64,
    /// False when `panel_height` is the configured maximum
    pub panel_measured: bool,
}

impl LayoutSnapshot {
    /// Read the current layout, falling back for the container offset and
    /// panel height. A failed viewport read is returned as an error.
    pub fn read<R: LayoutReader + ?Sized>(
        reader: &R,
        config: &PlacementConfig,
    ) -> Result<Self, LayoutError> {
        let viewport_height = reader.viewport_height()?;
        if !viewport_height.is_finite() {
            return Err(LayoutError::NonFinite("viewport_height"));
        }

        let container_top_offset = read_container_top(reader, config);

        let (panel_height, panel_measured) = match reader.panel_height() {
            Some(height) if height.is_finite() && height > 0.0 => (height, true),
            _ => (config.max_panel_height, false),
        };

        Ok(Self {
            container_top_offset,
            panel_height,
            viewport_height,
            panel_measured,
        })
    }
}

/// Live container offset, or the configured fallback when it cannot be read
pub fn read_container_top<R: LayoutReader + ?Sized>(reader: &R, config: &PlacementConfig) -> f64 {
    match reader.container_top_offset() {
        Ok(top) if top.is_finite() => top,
        Ok(top) => {
            log::warn!(
                "quick view container offset {} is not finite, using {}",
                top,
                config.fallback_container_top
            );
            config.fallback_container_top
        }
        Err(e) => {
            log::warn!(
                "quick view container offset unavailable ({}), using {}",
                e,
                config.fallback_container_top
            );
            config.fallback_container_top
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_uses_measurements() {
        let layout = StaticLayout::new(800.0).with_container_top(64.0).with_panel_height(300.0);
        let snapshot = LayoutSnapshot::read(&layout, &PlacementConfig::default()).unwrap();

        assert_eq!(snapshot.container_top_offset, 64.0);
        assert_eq!(snapshot.panel_height, 300.0);
        assert_eq!(snapshot.viewport_height, 800.0);
        assert!(snapshot.panel_measured);
    }

    #[test]
    fn test_snapshot_fallbacks() {
        let layout = StaticLayout::new(800.0);
        let snapshot = LayoutSnapshot::read(&layout, &PlacementConfig::default()).unwrap();

        assert_eq!(snapshot.container_top_offset, 50.0);
        assert_eq!(snapshot.panel_height, 556.0);
        assert!(!snapshot.panel_measured);
    }

    #[test]
    fn test_zero_panel_height_counts_as_unmeasured() {
        let layout = StaticLayout::new(800.0).with_panel_height(0.0);
        let snapshot = LayoutSnapshot::read(&layout, &PlacementConfig::default()).unwrap();
        assert_eq!(snapshot.panel_height, 556.0);
        assert!(!snapshot.panel_measured);
    }

    #[test]
    fn test_missing_viewport_is_an_error() {
        let layout = StaticLayout::new(f64::NAN);
        let result = LayoutSnapshot::read(&layout, &PlacementConfig::default());
        assert_eq!(result, Err(LayoutError::NonFinite("viewport_height")));
    }
}
