//! Quick View Placement WASM Module
//!
//! Computes where a floating preview panel ("quick view") goes next to the
//! list row it belongs to, and where its pointer sits so it still points at
//! that row.
//!
//! - `placement`: the pure position and pointer calculators
//! - `layout`: live layout reads behind the `LayoutReader` capability
//! - `quick_view`: host layer with the anchor-key recompute guard and styles
//! - `api`: JavaScript-facing functions

pub mod api;
pub mod error;
pub mod layout;
pub mod models;
pub mod placement;
pub mod quick_view;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfigError, LayoutError, QuickViewError};
pub use layout::{LayoutReader, LayoutSnapshot, StaticLayout};
pub use models::*;
pub use placement::{calculate_pointer_offset, calculate_position, resolve_placement};
pub use quick_view::{PanelStyle, PointerStyle, QuickView};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Quick view placement WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[WASM] ⚠️ logger already initialized".into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
