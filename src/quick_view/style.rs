//! Inline style values for the panel and its pointer

use serde::{Deserialize, Serialize};

use crate::models::{PointerOffset, Position};

/// Vertical style for the panel element. At most one edge is set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PanelStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
}

impl PanelStyle {
    pub fn from_position(position: Option<Position>) -> Self {
        match position {
            Some(Position::Top(top)) => Self {
                top: Some(px(top)),
                bottom: None,
            },
            Some(Position::Bottom(bottom)) => Self {
                top: None,
                bottom: Some(px(bottom)),
            },
            None => Self::default(),
        }
    }

    /// CSS declaration block, e.g. `top: 50px;`
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(top) = &self.top {
            css.push_str(&format!("top: {};", top));
        }
        if let Some(bottom) = &self.bottom {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&format!("bottom: {};", bottom));
        }
        css
    }
}

/// Vertical style for the pointer element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PointerStyle {
    pub top: String,
}

impl PointerStyle {
    pub fn from_offset(offset: PointerOffset) -> Self {
        Self { top: px(offset.top) }
    }

    pub fn to_css(&self) -> String {
        format!("top: {};", self.top)
    }
}

/// Format a pixel length (`50px`, `12.5px`)
fn px(value: f64) -> String {
    format!("{}px", value)
}
