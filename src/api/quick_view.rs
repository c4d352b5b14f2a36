//! WASM-owned quick view
//!
//! A single quick view instance lives in WASM memory, like the editor's
//! document. JS drives it from its lifecycle hooks: mount when the panel
//! opens, sync on every update, pointer/style on every render, unmount on
//! close. Layout is read from the live DOM.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize_optional, js_error, serialize, validate_finite};
use crate::error::QuickViewError;
use crate::layout::DomLayout;
use crate::models::{PlacementConfig, Position};
use crate::quick_view::{PanelStyle, PointerStyle, QuickView};
use crate::{wasm_log, wasm_warn};

lazy_static! {
    static ref QUICK_VIEW: Mutex<Option<QuickView>> = Mutex::new(None);
}

fn lock_quick_view() -> Result<MutexGuard<'static, Option<QuickView>>, JsValue> {
    QUICK_VIEW
        .lock()
        .map_err(|_| js_error(QuickViewError::StatePoisoned.to_string()))
}

fn mounted(guard: &mut Option<QuickView>) -> Result<&mut QuickView, JsValue> {
    guard
        .as_mut()
        .ok_or_else(|| js_error(QuickViewError::NotMounted.to_string()))
}

/// Result of mount/sync
#[derive(Serialize)]
struct SyncResult {
    position: Position,
    recomputed: bool,
}

/// Styles for one render
#[derive(Serialize)]
struct RenderStyle {
    panel: PanelStyle,
    pointer: PointerStyle,
}

/// Mount the quick view for an anchor row
///
/// `config` is an optional partial placement config; missing fields take
/// their defaults. Replaces any mounted quick view.
#[wasm_bindgen(js_name = quickViewMount)]
pub fn quick_view_mount(anchor_key: &str, anchor_offset: f64, config_js: JsValue) -> Result<JsValue, JsValue> {
    validate_finite(anchor_offset, "anchorOffset").map_err(js_error)?;

    let config: PlacementConfig = deserialize_optional(config_js, "Failed to deserialize config")?
        .unwrap_or_default();
    config.validate().map_err(|e| js_error(e.to_string()))?;

    let reader = DomLayout::new(&config);
    let view = QuickView::mount(config, anchor_key, anchor_offset, &reader)
        .map_err(|e| js_error(e.to_string()))?;

    wasm_log!("quickViewMount: key={}, position={:?}", anchor_key, view.position());

    let result = SyncResult {
        position: view.position(),
        recomputed: true,
    };

    let mut guard = lock_quick_view()?;
    if guard.is_some() {
        wasm_warn!("quickViewMount: replacing mounted quick view");
    }
    *guard = Some(view);

    serialize(&result, "Failed to serialize mount result")
}

/// Feed an update from the host view
///
/// Recomputes only when the anchor key changed or the panel had not been
/// measured yet. Returns `{position, recomputed}`.
#[wasm_bindgen(js_name = quickViewSync)]
pub fn quick_view_sync(anchor_key: &str, anchor_offset: f64) -> Result<JsValue, JsValue> {
    validate_finite(anchor_offset, "anchorOffset").map_err(js_error)?;

    let mut guard = lock_quick_view()?;
    let view = mounted(&mut guard)?;

    let reader = DomLayout::new(view.config());
    let recomputed = view
        .sync(anchor_key, anchor_offset, &reader)
        .map_err(|e| js_error(e.to_string()))?;

    if recomputed {
        wasm_log!("quickViewSync: key={}, position={:?}", anchor_key, view.position());
    }

    serialize(
        &SyncResult {
            position: view.position(),
            recomputed,
        },
        "Failed to serialize sync result",
    )
}

/// Pointer offset for the current render. Returns `{top}`.
#[wasm_bindgen(js_name = quickViewPointer)]
pub fn quick_view_pointer(anchor_offset: f64) -> Result<JsValue, JsValue> {
    validate_finite(anchor_offset, "anchorOffset").map_err(js_error)?;

    let mut guard = lock_quick_view()?;
    let view = mounted(&mut guard)?;

    let offset = view.pointer_offset(anchor_offset, &DomLayout::new(view.config()));
    serialize(&offset, "Failed to serialize pointer offset")
}

/// Panel and pointer styles for the current render
///
/// Returns `{panel: {top} | {bottom}, pointer: {top}}` with `px` strings.
#[wasm_bindgen(js_name = quickViewStyle)]
pub fn quick_view_style(anchor_offset: f64) -> Result<JsValue, JsValue> {
    validate_finite(anchor_offset, "anchorOffset").map_err(js_error)?;

    let mut guard = lock_quick_view()?;
    let view = mounted(&mut guard)?;

    let style = RenderStyle {
        panel: view.panel_style(),
        pointer: view.pointer_style(anchor_offset, &DomLayout::new(view.config())),
    };
    serialize(&style, "Failed to serialize style")
}

/// Drop the mounted quick view. Returns whether one was mounted.
#[wasm_bindgen(js_name = quickViewUnmount)]
pub fn quick_view_unmount() -> Result<bool, JsValue> {
    let mut guard = lock_quick_view()?;
    let was_mounted = guard.take().is_some();
    if was_mounted {
        wasm_log!("quickViewUnmount");
    }
    Ok(was_mounted)
}
