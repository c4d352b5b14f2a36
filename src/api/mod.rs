//! Quick view WASM API
//!
//! JavaScript-facing functions, organized by concern:
//!
//! - `helpers`: console logging, serialization and validation
//! - `placement`: stateless position and pointer calculations
//! - `quick_view`: the WASM-owned quick view driven by the host's lifecycle

pub mod helpers;
pub mod placement;
pub mod quick_view;

pub use placement::{
    calculate_pointer_offset_js, calculate_pointer_offset_with_js, calculate_position_js,
    calculate_position_with,
};
pub use quick_view::{
    quick_view_mount, quick_view_pointer, quick_view_style, quick_view_sync, quick_view_unmount,
};
