//! Placement functions
//!
//! Stateless exports. The `...With` variants take every measurement
//! explicitly; the others read container offset and viewport height from
//! the live DOM using the default configuration.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_optional, js_error, serialize, validate_finite};
use crate::layout::{read_container_top, DomLayout, LayoutReader};
use crate::models::{PlacementConfig, PlacementInput, Position};
use crate::placement::{calculate_pointer_offset_with, resolve_placement};

/// Compute the panel position against the live DOM
///
/// `panelHeight` may be omitted before the panel has been measured; the
/// maximum panel height is used instead.
///
/// Returns `{top}`.
#[wasm_bindgen(js_name = calculatePosition)]
pub fn calculate_position_js(anchor_offset: f64, panel_height: Option<f64>) -> Result<JsValue, JsValue> {
    validate_finite(anchor_offset, "anchorOffset").map_err(js_error)?;

    let config = PlacementConfig::default();
    let panel_height = match panel_height {
        Some(height) => {
            validate_finite(height, "panelHeight").map_err(js_error)?;
            height
        }
        None => config.max_panel_height,
    };

    let reader = DomLayout::new(&config);
    let viewport_height = reader
        .viewport_height()
        .map_err(|e| js_error(e.to_string()))?;

    let placement = resolve_placement(&PlacementInput {
        anchor_offset,
        container_top_offset: read_container_top(&reader, &config),
        panel_height,
        viewport_height,
        anchor_item_height: config.anchor_item_height,
    });

    serialize(&placement.position, "Failed to serialize position")
}

/// Compute a full placement from an explicit input object
///
/// Input: `{anchor_offset, container_top_offset, panel_height,
/// viewport_height, anchor_item_height}`.
/// Returns `{position, strategy, bounds}`.
#[wasm_bindgen(js_name = calculatePositionWith)]
pub fn calculate_position_with(input_js: JsValue) -> Result<JsValue, JsValue> {
    let input: PlacementInput = deserialize(input_js, "Failed to deserialize placement input")?;
    if let Some(field) = input.first_non_finite() {
        return Err(js_error(format!("{} must be a finite number", field)));
    }

    let placement = resolve_placement(&input);
    serialize(&placement, "Failed to serialize placement")
}

/// Compute the pointer offset against the live container offset
///
/// `position` is `{top}`, `{bottom}` or undefined. Returns `{top}`.
#[wasm_bindgen(js_name = calculatePointerOffset)]
pub fn calculate_pointer_offset_js(
    position_js: JsValue,
    panel_height: f64,
    anchor_offset: f64,
) -> Result<JsValue, JsValue> {
    let config = PlacementConfig::default();
    let container_top_offset = read_container_top(&DomLayout::new(&config), &config);
    pointer_offset(position_js, panel_height, anchor_offset, container_top_offset, &config)
}

/// Compute the pointer offset from explicit measurements
#[wasm_bindgen(js_name = calculatePointerOffsetWith)]
pub fn calculate_pointer_offset_with_js(
    position_js: JsValue,
    panel_height: f64,
    anchor_offset: f64,
    container_top_offset: f64,
) -> Result<JsValue, JsValue> {
    validate_finite(container_top_offset, "containerTopOffset").map_err(js_error)?;
    pointer_offset(
        position_js,
        panel_height,
        anchor_offset,
        container_top_offset,
        &PlacementConfig::default(),
    )
}

fn pointer_offset(
    position_js: JsValue,
    panel_height: f64,
    anchor_offset: f64,
    container_top_offset: f64,
    config: &PlacementConfig,
) -> Result<JsValue, JsValue> {
    validate_finite(panel_height, "panelHeight").map_err(js_error)?;
    validate_finite(anchor_offset, "anchorOffset").map_err(js_error)?;

    let position: Option<Position> = deserialize_optional(position_js, "Failed to deserialize position")?;
    let offset = calculate_pointer_offset_with(
        position,
        panel_height,
        anchor_offset,
        container_top_offset,
        config.default_pointer_offset,
    );

    serialize(&offset, "Failed to serialize pointer offset")
}
