//! Placement geometry types
//!
//! Value types exchanged between the placement calculators, the host layer
//! and JavaScript. All offsets are CSS pixels.

use serde::{Deserialize, Serialize};

/// Vertical offset of the panel relative to its containing element.
///
/// Exactly one edge is populated. Serializes to `{"top": n}` or
/// `{"bottom": n}`, matching the inline style object the view applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Distance from the container's top edge to the panel's top edge
    Top(f64),
    /// Distance from the container's bottom edge to the panel's bottom edge
    Bottom(f64),
}

impl Position {
    /// The top offset, if this position is expressed from the top
    pub fn top(&self) -> Option<f64> {
        match self {
            Position::Top(top) => Some(*top),
            Position::Bottom(_) => None,
        }
    }

    /// The bottom offset, if this position is expressed from the bottom
    pub fn bottom(&self) -> Option<f64> {
        match self {
            Position::Top(_) => None,
            Position::Bottom(bottom) => Some(*bottom),
        }
    }
}

/// Vertical offset of the pointer (caret) inside the panel.
///
/// `0` is the panel's own top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerOffset {
    pub top: f64,
}

impl PointerOffset {
    pub fn new(top: f64) -> Self {
        Self { top }
    }
}

/// Which alignment rule produced a position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum PlacementStrategy {
    /// Panel top edge lines up with the anchor's top edge
    TopAligned = 0,
    /// Panel bottom edge lines up with the anchor's bottom edge
    BottomAligned = 1,
    /// Panel centered on the anchor row
    Centered = 2,
}

/// Closed range a panel's top offset is clamped into.
///
/// `max_top` is negative when the panel is taller than the space below the
/// container's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementBounds {
    pub min_top: f64,
    pub max_top: f64,
}

impl PlacementBounds {
    /// Whether the panel fits inside the visible range at all
    pub fn is_degenerate(&self) -> bool {
        self.max_top < self.min_top
    }
}

/// Snapshot of everything the position calculation depends on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementInput {
    /// Viewport top to anchor row top
    pub anchor_offset: f64,
    /// Viewport top to scrollable container top
    pub container_top_offset: f64,
    /// Measured panel height, or the fallback maximum
    pub panel_height: f64,
    /// Current viewport height
    pub viewport_height: f64,
    /// Height of a single list row
    pub anchor_item_height: f64,
}

impl PlacementInput {
    /// Name of the first non-finite field, if any
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("anchor_offset", self.anchor_offset),
            ("container_top_offset", self.container_top_offset),
            ("panel_height", self.panel_height),
            ("viewport_height", self.viewport_height),
            ("anchor_item_height", self.anchor_item_height),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

/// Full result of a placement run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub strategy: PlacementStrategy,
    pub bounds: PlacementBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_serializes_as_style_object() {
        let json = serde_json::to_string(&Position::Top(50.0)).unwrap();
        assert_eq!(json, r#"{"top":50.0}"#);

        let json = serde_json::to_string(&Position::Bottom(12.5)).unwrap();
        assert_eq!(json, r#"{"bottom":12.5}"#);
    }

    #[test]
    fn test_position_deserializes_from_style_object() {
        let pos: Position = serde_json::from_str(r#"{"bottom": 30}"#).unwrap();
        assert_eq!(pos, Position::Bottom(30.0));
        assert_eq!(pos.top(), None);
        assert_eq!(pos.bottom(), Some(30.0));
    }

    #[test]
    fn test_strategy_serializes_as_number() {
        let json = serde_json::to_string(&PlacementStrategy::Centered).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn test_first_non_finite() {
        let mut input = PlacementInput {
            anchor_offset: 100.0,
            container_top_offset: 50.0,
            panel_height: 556.0,
            viewport_height: 1000.0,
            anchor_item_height: 47.0,
        };
        assert_eq!(input.first_non_finite(), None);

        input.viewport_height = f64::NAN;
        assert_eq!(input.first_non_finite(), Some("viewport_height"));
    }
}
