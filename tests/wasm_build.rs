//! WASM build test
//!
//! Exercises the exported functions and the DOM layout reader in a browser.

#![cfg(target_arch = "wasm32")]

use quickview_wasm::api::{calculate_pointer_offset_with_js, calculate_position_with, quick_view_unmount};
use quickview_wasm::layout::{DomLayout, LayoutReader};
use quickview_wasm::{LayoutError, Placement, PlacementConfig, PlacementInput, PlacementStrategy, PointerOffset, Position};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_calculate_position_with() {
    let input = serde_wasm_bindgen::to_value(&PlacementInput {
        anchor_offset: 560.0,
        container_top_offset: 50.0,
        panel_height: 400.0,
        viewport_height: 600.0,
        anchor_item_height: 47.0,
    })
    .unwrap();

    let result = calculate_position_with(input).unwrap();
    let placement: Placement = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(placement.position, Position::Top(150.0));
    assert_eq!(placement.strategy, PlacementStrategy::BottomAligned);
}

#[wasm_bindgen_test]
fn test_pointer_offset_without_position() {
    let result = calculate_pointer_offset_with_js(JsValue::UNDEFINED, 556.0, 100.0, 50.0).unwrap();
    let offset: PointerOffset = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(offset.top, 20.0);
}

#[wasm_bindgen_test]
fn test_rejects_non_finite_input() {
    let err = calculate_pointer_offset_with_js(JsValue::UNDEFINED, f64::NAN, 100.0, 50.0).unwrap_err();
    let err: js_sys::Error = err.dyn_into().unwrap();
    let message: String = err.message().into();
    assert!(message.contains("panelHeight"), "unexpected message: {}", message);
}

#[wasm_bindgen_test]
fn test_error_logging_macro() {
    quickview_wasm::wasm_error!("placement failed for {}", "row-1");
}

#[wasm_bindgen_test]
fn test_dom_layout_reads_window() {
    let config = PlacementConfig {
        container_selector: "#no-such-container".to_string(),
        ..PlacementConfig::default()
    };
    let reader = DomLayout::new(&config);

    let viewport = reader.viewport_height().unwrap();
    assert!(viewport.is_finite() && viewport > 0.0);
    assert_eq!(
        reader.container_top_offset(),
        Err(LayoutError::ElementNotFound("#no-such-container".to_string()))
    );
    assert_eq!(reader.panel_height(), None);
}

#[wasm_bindgen_test]
fn test_unmount_without_mount() {
    assert_eq!(quick_view_unmount().unwrap(), false);
}
