//! Panel position calculation
//!
//! Picks the first alignment that keeps the panel visible:
//!
//! 1. top-aligned with the anchor, when the panel fits below it
//! 2. bottom-aligned with the anchor, when the panel fits above it
//! 3. centered on the anchor row otherwise
//!
//! Every result is clamped into the container's visible range. A panel
//! taller than that range is left overflowing.

use crate::models::{Placement, PlacementBounds, PlacementInput, PlacementStrategy, Position};
use crate::utils::clamp;

/// Clamp range for a panel's top offset within the container
pub fn placement_bounds(
    container_top_offset: f64,
    panel_height: f64,
    viewport_height: f64,
) -> PlacementBounds {
    PlacementBounds {
        min_top: 0.0,
        max_top: viewport_height - container_top_offset - panel_height,
    }
}

/// Decide the panel position and report how it was chosen
pub fn resolve_placement(input: &PlacementInput) -> Placement {
    let PlacementInput {
        anchor_offset,
        container_top_offset,
        panel_height,
        viewport_height,
        anchor_item_height,
    } = *input;

    let bounds = placement_bounds(container_top_offset, panel_height, viewport_height);
    let space_below = viewport_height - anchor_offset;
    let space_above = anchor_offset - panel_height;

    let (strategy, raw_top) = if space_below > panel_height {
        (PlacementStrategy::TopAligned, anchor_offset - container_top_offset)
    } else if space_above > 0.0 {
        let aligned_top = anchor_offset - container_top_offset;
        let aligned_bottom = aligned_top - panel_height + anchor_item_height;
        (PlacementStrategy::BottomAligned, aligned_bottom)
    } else {
        let middle_anchor = anchor_offset + anchor_item_height / 2.0;
        let middle_panel = panel_height / 2.0;
        (PlacementStrategy::Centered, middle_anchor - middle_panel)
    };

    let top = clamp(raw_top, bounds.min_top, bounds.max_top);

    log::debug!(
        "quick view placement: {:?} raw_top={} top={} bounds=[{}, {}]",
        strategy,
        raw_top,
        top,
        bounds.min_top,
        bounds.max_top
    );
    if bounds.is_degenerate() {
        log::debug!(
            "quick view panel ({}px) taller than available space, overflowing",
            panel_height
        );
    }

    Placement {
        position: Position::Top(top),
        strategy,
        bounds,
    }
}

/// Compute the clamped panel position for an anchor row
///
/// # Arguments
/// * `anchor_offset` - Viewport top to anchor row top
/// * `container_top_offset` - Viewport top to scrollable container top
/// * `panel_height` - Measured panel height (or the fallback maximum)
/// * `viewport_height` - Current viewport height
/// * `anchor_item_height` - Height of one list row
///
/// # Returns
/// A `Position::Top` relative to the container
pub fn calculate_position(
    anchor_offset: f64,
    container_top_offset: f64,
    panel_height: f64,
    viewport_height: f64,
    anchor_item_height: f64,
) -> Position {
    resolve_placement(&PlacementInput {
        anchor_offset,
        container_top_offset,
        panel_height,
        viewport_height,
        anchor_item_height,
    })
    .position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ANCHOR_ITEM_HEIGHT, MAX_PANEL_HEIGHT};

    fn input(anchor: f64, container: f64, panel: f64, viewport: f64) -> PlacementInput {
        PlacementInput {
            anchor_offset: anchor,
            container_top_offset: container,
            panel_height: panel,
            viewport_height: viewport,
            anchor_item_height: ANCHOR_ITEM_HEIGHT,
        }
    }

    #[test]
    fn test_top_aligned_when_panel_fits_below() {
        // 900px below the anchor, panel is 556px
        let placement = resolve_placement(&input(100.0, 50.0, MAX_PANEL_HEIGHT, 1000.0));
        assert_eq!(placement.strategy, PlacementStrategy::TopAligned);
        assert_eq!(placement.position, Position::Top(50.0));
        assert_eq!(placement.bounds.max_top, 394.0);
    }

    #[test]
    fn test_bottom_aligned_near_list_end() {
        // 40px below, 160px above
        let placement = resolve_placement(&input(560.0, 50.0, 400.0, 600.0));
        assert_eq!(placement.strategy, PlacementStrategy::BottomAligned);
        // aligned bottom is 157, clamped into [0, 150]
        assert_eq!(placement.position, Position::Top(150.0));
    }

    #[test]
    fn test_bottom_aligned_unclamped() {
        let placement = resolve_placement(&input(700.0, 50.0, 400.0, 800.0));
        assert_eq!(placement.strategy, PlacementStrategy::BottomAligned);
        // 650 - 400 + 47
        assert_eq!(placement.position, Position::Top(297.0));
    }

    #[test]
    fn test_centered_overflow_follows_upper_bound() {
        let placement = resolve_placement(&input(250.0, 0.0, MAX_PANEL_HEIGHT, 500.0));
        assert_eq!(placement.strategy, PlacementStrategy::Centered);
        assert!(placement.bounds.is_degenerate());
        assert_eq!(placement.position, Position::Top(-56.0));
    }

    #[test]
    fn test_centered_within_bounds() {
        // Neither side fits but the bounds are wide enough to hold the center
        let placement = resolve_placement(&input(300.0, -400.0, 350.0, 600.0));
        assert_eq!(placement.strategy, PlacementStrategy::Centered);
        // 300 + 23.5 - 175
        assert_eq!(placement.position, Position::Top(148.5));
    }

    #[test]
    fn test_exact_fit_below_is_not_top_aligned() {
        // space below == panel height; strict comparison falls through
        let placement = resolve_placement(&input(600.0, 0.0, 400.0, 1000.0));
        assert_eq!(placement.strategy, PlacementStrategy::BottomAligned);
    }

    #[test]
    fn test_no_space_above_is_not_bottom_aligned() {
        // anchor - panel == 0; strict comparison falls through to centering
        let placement = resolve_placement(&input(556.0, 0.0, MAX_PANEL_HEIGHT, 600.0));
        assert_eq!(placement.strategy, PlacementStrategy::Centered);
        // 556 + 23.5 - 278 = 301.5, clamped into [0, 44]
        assert_eq!(placement.position, Position::Top(44.0));
    }

    #[test]
    fn test_calculate_position_matches_resolve() {
        let pos = calculate_position(100.0, 50.0, 556.0, 1000.0, 47.0);
        assert_eq!(pos, Position::Top(50.0));
    }
}
