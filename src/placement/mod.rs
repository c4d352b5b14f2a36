//! Quick view placement calculators
//!
//! Two pure functions run in sequence: [`position`] decides where the panel
//! goes so it stays visible, then [`pointer`] derives where the caret sits
//! inside the panel so it still points at the anchor row.

pub mod pointer;
pub mod position;

pub use pointer::{calculate_pointer_offset, calculate_pointer_offset_with};
pub use position::{calculate_position, placement_bounds, resolve_placement};
