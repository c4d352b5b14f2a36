//! Quick view host layer
//!
//! Owns the last resolved panel position and decides when to recompute it.
//! The calculators in [`crate::placement`] stay stateless; this layer feeds
//! them live layout reads and turns their results into style values.
//!
//! Recompute rules:
//! - on mount
//! - when the anchored item's key changes
//! - while the last placement was made with the fallback panel height, so
//!   the first real measurement refines it
//!
//! Other updates (for example the anchor offset shifting under the same key)
//! keep the existing position. The pointer is recomputed on every render.

pub mod style;

pub use style::{PanelStyle, PointerStyle};

use crate::error::QuickViewError;
use crate::layout::{read_container_top, LayoutReader, LayoutSnapshot};
use crate::models::{Placement, PlacementConfig, PlacementInput, PointerOffset, Position};
use crate::placement::{calculate_pointer_offset_with, resolve_placement};

/// A mounted quick view panel
#[derive(Clone, Debug)]
pub struct QuickView {
    config: PlacementConfig,
    anchor_key: String,
    placement: Placement,
    /// Whether `placement` was computed from a measured panel height
    measured: bool,
}

impl QuickView {
    /// Place a newly shown panel
    pub fn mount<R: LayoutReader + ?Sized>(
        config: PlacementConfig,
        anchor_key: impl Into<String>,
        anchor_offset: f64,
        reader: &R,
    ) -> Result<Self, QuickViewError> {
        let anchor_key = anchor_key.into();
        let (placement, measured) = Self::place(&config, anchor_offset, reader)?;

        log::debug!(
            "quick view mounted for '{}' at {:?} (measured: {})",
            anchor_key,
            placement.position,
            measured
        );

        Ok(Self {
            config,
            anchor_key,
            placement,
            measured,
        })
    }

    /// Apply an update from the host view
    ///
    /// Returns `true` if the position was recomputed.
    pub fn sync<R: LayoutReader + ?Sized>(
        &mut self,
        anchor_key: &str,
        anchor_offset: f64,
        reader: &R,
    ) -> Result<bool, QuickViewError> {
        let key_changed = anchor_key != self.anchor_key;
        if !key_changed && self.measured {
            log::trace!("quick view '{}' unchanged, keeping position", anchor_key);
            return Ok(false);
        }

        let (placement, measured) = Self::place(&self.config, anchor_offset, reader)?;

        log::debug!(
            "quick view recomputed for '{}' (key changed: {}, measured: {}): {:?}",
            anchor_key,
            key_changed,
            measured,
            placement.position
        );

        if key_changed {
            self.anchor_key = anchor_key.to_string();
        }
        self.placement = placement;
        self.measured = measured;
        Ok(true)
    }

    fn place<R: LayoutReader + ?Sized>(
        config: &PlacementConfig,
        anchor_offset: f64,
        reader: &R,
    ) -> Result<(Placement, bool), QuickViewError> {
        let snapshot = LayoutSnapshot::read(reader, config)?;
        let placement = resolve_placement(&PlacementInput {
            anchor_offset,
            container_top_offset: snapshot.container_top_offset,
            panel_height: snapshot.panel_height,
            viewport_height: snapshot.viewport_height,
            anchor_item_height: config.anchor_item_height,
        });
        Ok((placement, snapshot.panel_measured))
    }

    /// Pointer offset for the current render
    ///
    /// Reads the container offset live, so the pointer follows the anchor even
    /// when the container moved since the position was computed.
    pub fn pointer_offset<R: LayoutReader + ?Sized>(&self, anchor_offset: f64, reader: &R) -> PointerOffset {
        let container_top_offset = read_container_top(reader, &self.config);
        let panel_height = reader
            .panel_height()
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or(self.config.max_panel_height);

        calculate_pointer_offset_with(
            Some(self.placement.position),
            panel_height,
            anchor_offset,
            container_top_offset,
            self.config.default_pointer_offset,
        )
    }

    pub fn position(&self) -> Position {
        self.placement.position
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn anchor_key(&self) -> &str {
        &self.anchor_key
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Whether the current position came from a measured panel height
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Inline style for the panel element
    pub fn panel_style(&self) -> PanelStyle {
        PanelStyle::from_position(Some(self.placement.position))
    }

    /// Inline style for the pointer element for the current render
    pub fn pointer_style<R: LayoutReader + ?Sized>(&self, anchor_offset: f64, reader: &R) -> PointerStyle {
        PointerStyle::from_offset(self.pointer_offset(anchor_offset, reader))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;
    use crate::models::PlacementStrategy;

    fn layout() -> StaticLayout {
        StaticLayout::new(1000.0).with_container_top(50.0)
    }

    #[test]
    fn test_mount_uses_fallback_height() {
        let view = QuickView::mount(PlacementConfig::default(), "row-1", 100.0, &layout()).unwrap();
        assert_eq!(view.position(), Position::Top(50.0));
        assert_eq!(view.placement().strategy, PlacementStrategy::TopAligned);
        assert!(!view.is_measured());
    }

    #[test]
    fn test_measurement_triggers_one_recompute() {
        let mut layout = layout();
        let mut view = QuickView::mount(PlacementConfig::default(), "row-1", 700.0, &layout).unwrap();
        // 556px fallback does not fit below 700; bottom aligned: 650 - 556 + 47
        assert_eq!(view.position(), Position::Top(141.0));

        layout.set_panel_height(Some(200.0));
        assert!(view.sync("row-1", 700.0, &layout).unwrap());
        assert!(view.is_measured());
        assert_eq!(view.position(), Position::Top(650.0));

        // Same key, already measured: nothing to do
        assert!(!view.sync("row-1", 720.0, &layout).unwrap());
        assert_eq!(view.position(), Position::Top(650.0));
    }

    #[test]
    fn test_key_change_recomputes() {
        let layout = layout().with_panel_height(200.0);
        let mut view = QuickView::mount(PlacementConfig::default(), "row-1", 100.0, &layout).unwrap();
        assert!(view.is_measured());

        assert!(view.sync("row-2", 300.0, &layout).unwrap());
        assert_eq!(view.anchor_key(), "row-2");
        assert_eq!(view.position(), Position::Top(250.0));
    }

    #[test]
    fn test_pointer_follows_live_container() {
        let mut layout = layout().with_panel_height(200.0);
        let view = QuickView::mount(PlacementConfig::default(), "row-1", 100.0, &layout).unwrap();
        assert_eq!(view.pointer_offset(100.0, &layout).top, 20.0);

        // Window restored: container moved up by 30px
        layout.set_container_top(Some(20.0));
        assert_eq!(view.pointer_offset(100.0, &layout).top, 50.0);
    }

    #[test]
    fn test_pointer_style_tracks_pointer_offset() {
        let mut layout = layout().with_panel_height(200.0);
        let view = QuickView::mount(PlacementConfig::default(), "row-1", 100.0, &layout).unwrap();
        assert_eq!(view.pointer_style(100.0, &layout).to_css(), "top: 20px;");

        layout.set_container_top(Some(20.0));
        assert_eq!(view.pointer_style(100.0, &layout).top, "50px");
    }

    #[test]
    fn test_viewport_failure_propagates() {
        let layout = StaticLayout::new(f64::INFINITY);
        let result = QuickView::mount(PlacementConfig::default(), "row-1", 100.0, &layout);
        assert!(matches!(result, Err(QuickViewError::Layout(_))));
    }
}
