//! Pointer (caret) offset calculation
//!
//! The pointer lives in the panel's coordinate space (0 = panel top) but has
//! to line up with the anchor row in viewport space, whichever alignment the
//! panel ended up with.

use crate::models::{PointerOffset, Position, DEFAULT_POINTER_OFFSET};

/// Pointer offset for a resolved panel position, using the default
/// half-row correction
pub fn calculate_pointer_offset(
    position: Option<Position>,
    panel_height: f64,
    anchor_offset: f64,
    container_top_offset: f64,
) -> PointerOffset {
    calculate_pointer_offset_with(
        position,
        panel_height,
        anchor_offset,
        container_top_offset,
        DEFAULT_POINTER_OFFSET,
    )
}

/// Pointer offset with an explicit default offset
///
/// `default_offset` is returned as-is when there is no usable position, and
/// is otherwise added so the pointer centers on the row instead of its top
/// edge.
pub fn calculate_pointer_offset_with(
    position: Option<Position>,
    panel_height: f64,
    anchor_offset: f64,
    container_top_offset: f64,
    default_offset: f64,
) -> PointerOffset {
    let Some(position) = position else {
        return PointerOffset::new(default_offset);
    };

    let normalized_top = match position {
        Position::Top(top) => top,
        Position::Bottom(bottom) => bottom - panel_height + container_top_offset,
    };

    if !normalized_top.is_finite() {
        log::warn!("quick view position {:?} is not usable, pointer falls back", position);
        return PointerOffset::new(default_offset);
    }

    let anchor_rel_container = anchor_offset - container_top_offset;
    let anchor_rel_panel = anchor_rel_container - normalized_top;

    PointerOffset::new(anchor_rel_panel + default_offset)
}
